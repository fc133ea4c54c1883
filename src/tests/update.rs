use std::time::Duration;

use crate::error::Error;
use crate::storage::Memory;
use crate::storage::Storage;
use crate::tests::helper;

#[tokio::test]
async fn test_update_title_only() {
    let storage = Memory::new();

    let id = helper::add(&storage, "Shopping", "milk, eggs").await;
    let before = helper::note(&storage, id).await;

    // make sure the clock moves on
    tokio::time::sleep(Duration::from_millis(2)).await;

    // new title, skip the text
    let outcome = helper::run(storage.clone(), &["update", &id.to_string()], &["Groceries", "  "])
        .await;
    assert!(outcome.result.is_ok());
    assert_eq!("Title updated!\n", outcome.output);
    assert_eq!(
        vec![
            "Enter a new note title (press Enter to skip):",
            "Enter a new note text (press Enter to skip):"
        ],
        outcome.questions
    );

    let after = helper::note(&storage, id).await;
    assert_eq!("Groceries", after.title);
    assert_eq!(before.body, after.body);
    assert_eq!(before.created_at, after.created_at);
    assert!(after.updated_at > before.updated_at);

    // modification date is now shown
    let outcome = helper::run(storage.clone(), &["get", &id.to_string()], &[]).await;
    assert!(outcome.result.is_ok());
    assert!(outcome.output.contains("Title: Groceries\n"));
    assert!(outcome.output.contains("Modified: "));
    assert!(outcome.output.contains("milk, eggs\n"));
}

#[tokio::test]
async fn test_update_text_only() {
    let storage = Memory::new();

    let id = helper::add(&storage, "Shopping", "milk, eggs").await;

    let outcome = helper::run(storage.clone(), &["u", &id.to_string()], &["", "bread"]).await;
    assert!(outcome.result.is_ok());
    assert_eq!("Text updated!\n", outcome.output);

    let note = helper::note(&storage, id).await;
    assert_eq!("Shopping", note.title);
    assert_eq!("bread", note.body);
}

#[tokio::test]
async fn test_update_both_fields() {
    let storage = Memory::new();

    let id = helper::add(&storage, "Shopping", "milk, eggs").await;

    let outcome =
        helper::run(storage.clone(), &["update", &id.to_string()], &["Groceries", "bread"]).await;
    assert!(outcome.result.is_ok());
    assert_eq!("Title updated!\nText updated!\n", outcome.output);

    let note = helper::note(&storage, id).await;
    assert_eq!("Groceries", note.title);
    assert_eq!("bread", note.body);
}

#[tokio::test]
async fn test_update_nothing() {
    let storage = Memory::new();

    let id = helper::add(&storage, "Shopping", "milk, eggs").await;
    let before = helper::note(&storage, id).await;

    let outcome = helper::run(storage.clone(), &["update", &id.to_string()], &["", ""]).await;
    assert!(outcome.result.is_ok());
    assert_eq!("", outcome.output);

    assert_eq!(before, helper::note(&storage, id).await);
}

#[tokio::test]
async fn test_update_unknown_note() {
    let storage = Memory::new();

    let outcome = helper::run(storage.clone(), &["update", "3"], &["Groceries", "bread"]).await;
    assert!(matches!(outcome.result, Err(Error::NotFound(3))));

    // not asked anything
    assert!(outcome.questions.is_empty());
    assert!(storage.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreadable_text_keeps_title_outcome() {
    let storage = Memory::new();

    let id = helper::add(&storage, "Shopping", "milk, eggs").await;

    let mut input = helper::BrokenInput::new(&["Groceries"]);
    let (result, output) =
        helper::run_with_input(storage.clone(), &["update", &id.to_string()], &mut input).await;

    // the stored title is still reported
    assert_eq!("Title updated!\n", output);
    assert!(matches!(result, Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::InvalidData));

    let note = helper::note(&storage, id).await;
    assert_eq!("Groceries", note.title);
    assert_eq!("milk, eggs", note.body);
}

#[tokio::test]
async fn test_unreadable_title_writes_nothing() {
    let storage = Memory::new();

    let id = helper::add(&storage, "Shopping", "milk, eggs").await;
    let before = helper::note(&storage, id).await;

    let mut input = helper::BrokenInput::new(&[]);
    let (result, output) =
        helper::run_with_input(storage.clone(), &["update", &id.to_string()], &mut input).await;

    assert!(matches!(result, Err(Error::Io(_))));
    assert_eq!("", output);
    assert_eq!(before, helper::note(&storage, id).await);
}
