//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicknote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use quicknote_core::db::open_db_in_memory;
use quicknote_core::{NotePatch, NoteStore, SqliteKvStore};

fn main() {
    println!("quicknote_core version={}", quicknote_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("quicknote_core smoke failed: {err}");
            std::process::exit(1);
        }
    };

    let mut store = NoteStore::open(SqliteKvStore::new(conn));
    let id = store.create();
    store.edit(
        &id,
        NotePatch {
            title: Some("smoke".to_string()),
            ..NotePatch::default()
        },
    );
    store.flush();

    println!("quicknote_core notes={}", store.notes().len());
}
