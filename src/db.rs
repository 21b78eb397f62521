use crate::notes::{
    Lookup, Note, NoteID, NoteSummary, Owner, OwnerImage, OwnerNotes, User, UserImage,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open a pool for `settings.url` and bring the schema up to date.
pub async fn connect(settings: &crate::settings::Database) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&settings.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(url = %settings.url, "database ready");

    Ok(pool)
}

#[derive(Debug, sqlx::FromRow)]
struct OwnerNoteRow {
    user_id: String,
    username: String,
    name: Option<String>,
    image_id: Option<String>,
    note_id: Option<NoteID>,
    note_title: Option<String>,
}

/// The owner with the given username and their notes, in a single query.
///
/// Usernames compare case-sensitively. Each returned row carries the owner
/// columns plus at most one note; an owner without notes comes back as a
/// single row with the note columns unset.
pub async fn find_owner_with_notes(
    pool: &SqlitePool,
    username: &str,
) -> Result<Lookup<OwnerNotes>, sqlx::Error> {
    let rows = sqlx::query_as::<_, OwnerNoteRow>(
        "SELECT user.id AS user_id, user.username, user.name,
                user_image.id AS image_id,
                note.id AS note_id, note.title AS note_title
         FROM user
         LEFT JOIN user_image ON user_image.user_id = user.id
         LEFT JOIN note ON note.owner_id = user.id
         WHERE user.username = ?
         ORDER BY note.rowid",
    )
    .bind(username)
    .fetch_all(pool)
    .await?;

    let mut rows = rows.into_iter();
    let Some(first) = rows.next() else {
        return Ok(Lookup::NotFound);
    };

    let mut owner = Owner {
        id: first.user_id,
        username: first.username,
        name: first.name,
        image: first.image_id.map(|id| OwnerImage { id }),
        notes: Vec::new(),
    };

    let first_note = first.note_id.zip(first.note_title);
    let other_notes = rows.filter_map(|row| row.note_id.zip(row.note_title));
    owner.notes = first_note
        .into_iter()
        .chain(other_notes)
        .map(|(id, title)| NoteSummary { id, title })
        .collect();

    Ok(Lookup::Found(OwnerNotes { owner }))
}

pub async fn find_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Lookup<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        "SELECT user.username, user.name, user.created_at,
                user_image.id AS image_id
         FROM user
         LEFT JOIN user_image ON user_image.user_id = user.id
         WHERE user.username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user.into())
}

/// A note, only if it belongs to the user with `owner_username`.
pub async fn find_note_of_owner(
    pool: &SqlitePool,
    owner_username: &str,
    note_id: &str,
) -> Result<Lookup<Note>, sqlx::Error> {
    let note = sqlx::query_as::<_, Note>(
        "SELECT note.id, note.title, note.content, note.updated_at
         FROM note
         JOIN user ON user.id = note.owner_id
         WHERE note.id = ? AND user.username = ?",
    )
    .bind(note_id)
    .bind(owner_username)
    .fetch_optional(pool)
    .await?;

    Ok(note.into())
}

pub async fn find_user_image(
    pool: &SqlitePool,
    image_id: &str,
) -> Result<Lookup<UserImage>, sqlx::Error> {
    let image = sqlx::query_as::<_, UserImage>(
        "SELECT content_type, blob FROM user_image WHERE id = ?",
    )
    .bind(image_id)
    .fetch_optional(pool)
    .await?;

    Ok(image.into())
}

#[cfg(test)]
pub mod fixtures {
    use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

    pub const KODY_IMAGE: &[u8] = &[0x89, b'P', b'N', b'G'];

    /// A fresh in-memory database with the schema applied.
    ///
    /// Every connection to `sqlite::memory:` opens its own database, so the
    /// pool is capped at one connection.
    pub async fn empty_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database should open");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations should apply");
        pool
    }

    /// `kody` (with a name, an image and three notes) and `ghost` (no name,
    /// no image, no notes).
    pub async fn seeded_pool() -> SqlitePool {
        let pool = empty_pool().await;

        insert_user(&pool, "u-kody", "kody", Some("Kody")).await;
        insert_user(&pool, "u-ghost", "ghost", None).await;
        insert_user_image(&pool, "img-kody", "u-kody", "image/png", KODY_IMAGE).await;

        insert_note(&pool, "n-3", "u-kody", "Koalas like to cuddle", "Cuddly").await;
        insert_note(&pool, "n-1", "u-kody", "Basic Koala Facts", "Eucalyptus").await;
        insert_note(&pool, "n-2", "u-kody", "<b>Not</b> a bear", "Marsupial & proud").await;

        pool
    }

    pub async fn insert_user(pool: &SqlitePool, id: &str, username: &str, name: Option<&str>) {
        sqlx::query("INSERT INTO user (id, email, username, name) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(format!("{username}@example.com"))
            .bind(username)
            .bind(name)
            .execute(pool)
            .await
            .expect("user should insert");
    }

    pub async fn insert_user_image(
        pool: &SqlitePool,
        id: &str,
        user_id: &str,
        content_type: &str,
        blob: &[u8],
    ) {
        sqlx::query("INSERT INTO user_image (id, content_type, blob, user_id) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(content_type)
            .bind(blob)
            .bind(user_id)
            .execute(pool)
            .await
            .expect("user image should insert");
    }

    pub async fn insert_note(pool: &SqlitePool, id: &str, owner_id: &str, title: &str, content: &str) {
        sqlx::query("INSERT INTO note (id, title, content, owner_id) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(title)
            .bind(content)
            .bind(owner_id)
            .execute(pool)
            .await
            .expect("note should insert");
    }
}
