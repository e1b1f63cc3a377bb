use wall_core::{
    Comment, DeletedTarget, InMemoryRecordRepository, Note, Record, RecordKind, RecordListQuery,
    RecordRepository, User, WallError, WallService,
};

fn deleted_parent(id: u64) -> WallError {
    WallError::NotPermittedOnDeleted {
        id,
        target: DeletedTarget::Parent,
    }
}

#[test]
fn first_created_record_gets_id_one() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(1, "first note")).unwrap();
    assert_eq!(note.id, 1);
}

#[test]
fn ids_increase_across_notes_and_comments() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(1, "a")).unwrap();
    let comment = wall.create_comment(Comment::new(2, note.id, "b")).unwrap();
    let second = wall.create_note(Note::new(1, "c")).unwrap();

    assert_eq!((note.id, comment.id, second.id), (1, 2, 3));
    assert_eq!(wall.repository().last_id(), 3);
}

#[test]
fn create_overwrites_caller_supplied_id_and_flag() {
    let mut wall = WallService::in_memory();
    let mut input = Note::new(1, "sneaky");
    input.id = 42;
    input.is_deleted = true;

    let created = wall.create_note(input).unwrap();
    assert_eq!(created.id, 1);
    assert!(!created.is_deleted);
    assert_eq!(wall.get_by_id(42), None);
}

#[test]
fn comment_on_deleted_parent_is_rejected_and_not_stored() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(1, "note")).unwrap();
    wall.delete(note.id);
    let count_before = wall.record_count();

    let err = wall
        .create_comment(Comment::new(2, note.id, "too late"))
        .unwrap_err();

    assert_eq!(err, deleted_parent(note.id));
    assert_eq!(wall.record_count(), count_before);
    assert!(wall.get_comments_by_parent(note.id).is_empty());
}

#[test]
fn rejected_create_still_consumes_its_id() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(1, "note")).unwrap();
    wall.delete(note.id);
    wall.create_comment(Comment::new(2, note.id, "rejected"))
        .unwrap_err();

    let next = wall.create_note(Note::new(1, "next")).unwrap();
    assert_eq!(next.id, 3);
    assert_eq!(wall.get_by_id(2), None);
}

#[test]
fn comment_on_unknown_parent_is_accepted() {
    let mut wall = WallService::in_memory();
    let comment = wall.create_comment(Comment::new(1, 99, "orphan")).unwrap();
    assert_eq!(wall.get_comments_by_parent(99), vec![comment]);
}

#[test]
fn comments_may_reply_to_comments() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(1, "note")).unwrap();
    let reply = wall.create_comment(Comment::new(2, note.id, "reply")).unwrap();
    let nested = wall.create_comment(Comment::new(1, reply.id, "nested")).unwrap();

    assert_eq!(wall.get_comments_by_parent(reply.id), vec![nested]);
    assert_eq!(wall.get_comments_by_parent(note.id), vec![reply.clone()]);

    wall.delete_comment(reply.id);
    let err = wall
        .create_comment(Comment::new(1, reply.id, "nested again"))
        .unwrap_err();
    assert_eq!(err, deleted_parent(reply.id));
}

#[test]
fn delete_flips_flag_and_keeps_other_fields() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(3, "keep me")).unwrap();

    wall.delete(note.id);

    let stored = wall.get_by_id(note.id).unwrap();
    let expected = Note {
        is_deleted: true,
        ..note
    };
    assert_eq!(stored, Record::Note(expected));
}

#[test]
fn restore_clears_flag_and_can_cycle() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(1, "note")).unwrap();
    let comment = wall.create_comment(Comment::new(2, note.id, "c")).unwrap();

    for _ in 0..2 {
        wall.delete_comment(comment.id);
        assert!(wall.get_by_id(comment.id).unwrap().is_deleted());
        wall.restore_comment(comment.id);
        assert!(!wall.get_by_id(comment.id).unwrap().is_deleted());
    }

    wall.delete(note.id);
    wall.restore(note.id);
    assert_eq!(wall.get_notes_by_user(1), vec![note]);
}

#[test]
fn unknown_ids_are_silent_noops() {
    let mut wall = WallService::in_memory();
    wall.create_note(Note::new(1, "note")).unwrap();

    wall.delete(50);
    wall.restore(50);
    wall.delete_comment(51);
    wall.restore_comment(51);
    wall.edit(52, Note::new(1, "ghost")).unwrap();
    wall.edit_comment(53, Comment::new(1, 1, "ghost")).unwrap();

    assert_eq!(wall.record_count(), 1);
    assert_eq!(wall.get_by_id(52), None);
}

#[test]
fn edit_replaces_content_and_keeps_stored_id() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(1, "draft")).unwrap();

    wall.edit(note.id, Note::new(1, "final")).unwrap();

    let stored = wall.get_by_id(note.id).unwrap();
    assert_eq!(stored.id(), note.id);
    assert_eq!(stored.text(), "final");
    assert!(stored.is_active());
    assert_eq!(wall.record_count(), 1);
}

#[test]
fn edit_of_deleted_record_is_rejected() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(1, "draft")).unwrap();
    wall.delete(note.id);

    let err = wall.edit(note.id, Note::new(1, "final")).unwrap_err();
    assert_eq!(
        err,
        WallError::NotPermittedOnDeleted {
            id: note.id,
            target: DeletedTarget::Record,
        }
    );
    assert_eq!(wall.get_by_id(note.id).unwrap().text(), "draft");
}

#[test]
fn edit_of_comment_under_deleted_parent_is_rejected() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(1, "note")).unwrap();
    let comment = wall.create_comment(Comment::new(2, note.id, "old")).unwrap();
    wall.delete(note.id);

    let err = wall
        .edit_comment(comment.id, Comment::new(2, note.id, "new"))
        .unwrap_err();
    assert_eq!(err, deleted_parent(note.id));
    assert_eq!(wall.get_by_id(comment.id).unwrap().text(), "old");
}

#[test]
fn edit_cannot_move_comment_under_deleted_parent() {
    let mut wall = WallService::in_memory();
    let open = wall.create_note(Note::new(1, "open")).unwrap();
    let closed = wall.create_note(Note::new(1, "closed")).unwrap();
    let comment = wall.create_comment(Comment::new(2, open.id, "c")).unwrap();
    wall.delete(closed.id);

    let err = wall
        .edit_comment(comment.id, Comment::new(2, closed.id, "moved"))
        .unwrap_err();
    assert_eq!(err, deleted_parent(closed.id));
    assert_eq!(wall.get_comments_by_parent(open.id), vec![comment]);
}

#[test]
fn notes_by_user_returns_only_active_notes_of_that_user() {
    let mut wall = WallService::in_memory();
    let kept = wall.create_note(Note::new(1, "kept")).unwrap();
    let hidden = wall.create_note(Note::new(1, "hidden")).unwrap();
    wall.create_note(Note::new(2, "someone else")).unwrap();
    wall.create_comment(Comment::new(1, kept.id, "own comment"))
        .unwrap();
    wall.delete(hidden.id);

    assert_eq!(wall.get_notes_by_user(1), vec![kept]);
    assert!(wall.get_notes_by_user(9).is_empty());
}

#[test]
fn friends_notes_concatenate_in_friend_list_order() {
    let mut wall = WallService::in_memory();
    let first = wall.create_note(Note::new(2, "from 2")).unwrap();
    let second = wall.create_note(Note::new(3, "from 3")).unwrap();
    let third = wall.create_note(Note::new(2, "again from 2")).unwrap();

    let user = User::new(1, "masha", "password", vec![3, 2]);
    let mut expected = wall.get_notes_by_user(3);
    expected.extend(wall.get_notes_by_user(2));
    let friends_notes = wall.get_friends_notes(&user);

    assert_eq!(friends_notes, expected);
    assert_eq!(friends_notes, vec![second, first, third]);
}

#[test]
fn friends_notes_keep_duplicates() {
    let mut wall = WallService::in_memory();
    let note = wall.create_note(Note::new(2, "twice")).unwrap();

    let user = User::new(1, "masha", "password", vec![2, 2]);
    assert_eq!(wall.get_friends_notes(&user), vec![note.clone(), note]);
}

#[test]
fn list_records_can_include_deleted() {
    let mut wall = WallService::new(InMemoryRecordRepository::new());
    let note = wall.create_note(Note::new(1, "note")).unwrap();
    let comment = wall.create_comment(Comment::new(2, note.id, "c")).unwrap();
    wall.delete_comment(comment.id);

    let query = RecordListQuery {
        kind: Some(RecordKind::Comment),
        include_deleted: true,
        ..RecordListQuery::default()
    };
    let listed = wall.list_records(&query);
    assert_eq!(listed.len(), 1);
    assert!(listed[0].is_deleted());
    assert_eq!(wall.list_records(&RecordListQuery::default()).len(), 1);
    assert_eq!(wall.repository().record_count(), 2);
}
