use super::{escape, path_segment};
use crate::notes::User;

pub fn profile(user: &User) -> String {
    format!(
        r#"<div class="container mb-48 mt-36 flex flex-col items-center justify-center">
<img src="{image_src}" alt="{display_name}" class="h-52 w-52 rounded-full object-cover">
<h1 class="mt-10 text-center text-h2">{display_name}</h1>
<p class="mt-2 text-center text-muted-foreground">Joined {joined}</p>
<a href="/users/{username}/notes" class="mt-10">{display_name}'s notes</a>
</div>"#,
        image_src = escape(&user.image_src()),
        display_name = escape(user.display_name()),
        joined = user.created_at.format("%B %-d, %Y"),
        username = path_segment(&user.username),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn profile_links_to_notes() {
        let user = User {
            username: String::from("kody"),
            name: None,
            image_id: None,
            created_at: chrono::Utc.with_ymd_and_hms(2023, 5, 4, 0, 0, 0).unwrap(),
        };

        let html = profile(&user);
        assert!(html.contains(r#"<a href="/users/kody/notes" class="mt-10">kody's notes</a>"#));
        assert!(html.contains("Joined May 4, 2023"));
        assert!(html.contains(r#"src="/img/user.png""#));
    }
}
