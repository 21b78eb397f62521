use super::{cn, escape, path_segment};
use crate::notes::{Note, OwnerNotes};

const NAV_LINK_CLASS: &str = "line-clamp-2 block rounded-l-full py-2 pl-8 pr-6 text-base lg:text-xl";
const ACTIVE_NAV_LINK_CLASS: &str = "bg-accent";

/// The two-pane notes page: the owner header and note list on the left,
/// `outlet` (whatever the child route rendered) on the right.
///
/// `active_note_id` is the note in the current location, if any; its link is
/// highlighted.
pub fn layout(payload: &OwnerNotes, active_note_id: Option<&str>, outlet: &str) -> String {
    let owner = &payload.owner;
    let display_name = escape(owner.display_name());
    let username = path_segment(&owner.username);

    let note_links = owner
        .notes
        .iter()
        .map(|note| {
            let is_active = active_note_id == Some(note.id.as_str());
            format!(
                r#"<li><a href="/users/{username}/notes/{id}" class="{class}">{title}</a></li>"#,
                id = path_segment(&note.id),
                class = cn([
                    Some(NAV_LINK_CLASS),
                    is_active.then_some(ACTIVE_NAV_LINK_CLASS)
                ]),
                title = escape(&note.title),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="container flex h-full min-h-[400px] pb-12">
<div class="grid w-full grid-cols-4 bg-muted pl-2 md:container md:mx-2 md:rounded-3xl md:pr-0">
<div class="relative col-span-1">
<div class="absolute inset-0 flex flex-col">
<a href="/users/{username}" class="flex flex-col items-center justify-center gap-2 bg-muted pb-4 pl-8 pr-4 pt-12 lg:flex-row lg:justify-start lg:gap-4">
<img src="{image_src}" alt="{display_name}" class="h-16 w-16 rounded-full object-cover lg:h-24 lg:w-24">
<h1 class="text-center text-base font-bold md:text-lg lg:text-left lg:text-2xl">{display_name}'s Notes</h1>
</a>
<ul class="overflow-y-auto overflow-x-hidden pb-12">
{note_links}
</ul>
</div>
</div>
<main class="relative col-span-3 bg-accent md:rounded-r-3xl">
{outlet}
</main>
</div>
</div>"#,
        image_src = escape(&owner.image_src()),
    )
}

/// Outlet content when no note is selected.
pub fn index() -> String {
    String::from(
        r#"<div class="container pt-12 md:pt-20"><p class="text-body-md">Select a note</p></div>"#,
    )
}

/// Outlet content for a single note.
pub fn detail(note: &Note) -> String {
    format!(
        r#"<div class="absolute inset-0 flex flex-col px-10">
<h2 class="mb-2 pt-12 text-h2 lg:mb-6">{title}</h2>
<div class="overflow-y-auto pb-24">
<p class="whitespace-break-spaces text-sm md:text-lg">{content}</p>
</div>
<p class="text-sm text-muted-foreground">Updated {updated}</p>
</div>"#,
        title = escape(&note.title),
        content = escape(&note.content),
        updated = note.updated_at.format("%Y-%m-%d"),
    )
}
