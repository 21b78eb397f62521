use serde::{Deserialize, Serialize};

pub type UserID = String;
pub type NoteID = String;
pub type ImageID = String;

pub const DEFAULT_USER_IMAGE: &str = "/img/user.png";
pub const USER_IMAGES_PATH: &str = "/resources/user-images";

/// What the notes layout is rendered from: the owner's display fields with
/// their notes projected down to [`NoteSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerNotes {
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: UserID,
    pub username: String,
    pub name: Option<String>,
    pub image: Option<OwnerImage>,
    // in stored order
    pub notes: Vec<NoteSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerImage {
    pub id: ImageID,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: NoteID,
    pub title: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: Option<String>,
    pub image_id: Option<ImageID>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Note {
    pub id: NoteID,
    pub title: String,
    pub content: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserImage {
    pub content_type: String,
    pub blob: Vec<u8>,
}

/// Either what was asked for, or a marker that it isn't there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(found) => Lookup::Found(found),
            None => Lookup::NotFound,
        }
    }
}

impl Owner {
    pub fn display_name(&self) -> &str {
        display_name(self.name.as_deref(), &self.username)
    }

    pub fn image_src(&self) -> String {
        user_image_src(self.image.as_ref().map(|image| image.id.as_str()))
    }
}

impl User {
    pub fn display_name(&self) -> &str {
        display_name(self.name.as_deref(), &self.username)
    }

    pub fn image_src(&self) -> String {
        user_image_src(self.image_id.as_deref())
    }
}

pub fn display_name<'a>(name: Option<&'a str>, username: &'a str) -> &'a str {
    name.unwrap_or(username)
}

pub fn user_image_src(image_id: Option<&str>) -> String {
    match image_id {
        Some(image_id) => format!(
            "{USER_IMAGES_PATH}/{}",
            urlencoding::encode(image_id)
        ),
        None => String::from(DEFAULT_USER_IMAGE),
    }
}
