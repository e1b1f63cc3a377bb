//! Wall demonstration entry point.
//!
//! # Responsibility
//! - Walk three users through posting, commenting and reading friends' notes.
//! - End on a comment to a deleted note, which must fail the run.
//!
//! Set `WALL_LOG_DIR` (absolute) and optionally `WALL_LOG_LEVEL` to write logs.

use std::error::Error;
use wall_core::{start_logging, Comment, LogConfig, Note, User, WallService};

fn main() -> Result<(), Box<dyn Error>> {
    if let Some(config) = LogConfig::from_env()? {
        start_logging(config)?;
    }
    log::info!(
        "event=demo_start module=wall_cli status=ok version={}",
        wall_core::core_version()
    );

    let masha = User::new(1, "masha", "password", vec![2, 3]);
    let petya = User::new(2, "petya", "$%FYdnfb4f", Vec::new());
    let vasya = User::new(3, "vasya", "sdfJFG3f^$", Vec::new());

    let mut wall = WallService::in_memory();
    let mashas_note = wall.create_note(Note::new(masha.id, "Masha wrote a note"))?;
    wall.create_note(Note::new(petya.id, "Petya wrote a note"))?;
    wall.create_note(Note::new(vasya.id, "Vasya wrote a note"))?;
    wall.create_comment(Comment::new(
        petya.id,
        mashas_note.id,
        "Petya commented on Masha's note",
    ))?;

    for note in wall.get_friends_notes(&masha) {
        println!("note id={} user_id={} text={}", note.id, note.user_id, note.text);
    }

    wall.delete(mashas_note.id);

    // Parent is deleted now, so this returns NotPermittedOnDeleted.
    wall.create_comment(Comment::new(
        petya.id,
        mashas_note.id,
        "Petya tries to comment on Masha's note again",
    ))?;

    Ok(())
}
