use roomcall_core::{
    ConfirmAction, InviteController, InviteError, InviteEvent, InviteKind, Navigator,
    OutboundMessage, RoomId, SoundEffect, SoundEffects, Transport, UserId, UserPreview,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the collaborators were asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Sound(SoundEffect),
    Send(OutboundMessage),
    GoTo(String),
}

type Journal = Rc<RefCell<Vec<Call>>>;

struct Recorder {
    journal: Journal,
}

impl SoundEffects for Recorder {
    fn play_effect(&mut self, effect: SoundEffect) {
        self.journal.borrow_mut().push(Call::Sound(effect));
    }
}

impl Transport for Recorder {
    fn send(&mut self, message: OutboundMessage) -> Result<(), InviteError> {
        self.journal.borrow_mut().push(Call::Send(message));
        Ok(())
    }
}

impl Navigator for Recorder {
    fn go_to(&mut self, path: &str) -> Result<(), InviteError> {
        self.journal.borrow_mut().push(Call::GoTo(path.to_string()));
        Ok(())
    }
}

fn new_controller() -> (InviteController<Recorder, Recorder, Recorder>, Journal) {
    let journal: Journal = Rc::new(RefCell::new(Vec::new()));
    let recorder = || Recorder {
        journal: journal.clone(),
    };
    let controller = InviteController::new(recorder(), recorder(), recorder());
    (controller, journal)
}

fn event(kind: InviteKind, room: &str, user: &str) -> InviteEvent {
    InviteEvent {
        kind,
        room_id: RoomId::from(room),
        room_name: "Foo".to_string(),
        user: UserPreview {
            username: format!("{}_name", user),
            display_name: format!("User {}", user),
            avatar_url: format!("https://example.com/{}.png", user),
            user_id: UserId::from(user),
        },
    }
}

/// Collaborator calls other than sounds.
fn actions(journal: &Journal) -> Vec<Call> {
    journal
        .borrow()
        .iter()
        .filter(|call| !matches!(call, Call::Sound(_)))
        .cloned()
        .collect()
}

#[test]
fn test_invite_confirm_joins_and_navigates() {
    let (mut controller, journal) = new_controller();

    controller.on_invite_received(event(InviteKind::Invite, "r1", "u1"));
    controller.on_confirm().unwrap();

    assert_eq!(
        *journal.borrow(),
        vec![
            Call::Sound(SoundEffect::RoomInvite),
            Call::Send(OutboundMessage::JoinRoom {
                room_id: RoomId::from("r1")
            }),
            Call::GoTo("/room/r1".to_string()),
        ]
    );
    assert!(controller.pending().is_none());
}

#[test]
fn test_followed_user_room_confirm_joins_and_navigates() {
    let (mut controller, journal) = new_controller();

    controller.on_invite_received(event(InviteKind::FollowedUserCreatedRoom, "r4", "u2"));
    let action = controller.on_confirm().unwrap();

    assert_eq!(
        action,
        Some(ConfirmAction::JoinRoom {
            room_id: RoomId::from("r4")
        })
    );
    assert_eq!(
        actions(&journal),
        vec![
            Call::Send(OutboundMessage::JoinRoom {
                room_id: RoomId::from("r4")
            }),
            Call::GoTo("/room/r4".to_string()),
        ]
    );
}

#[test]
fn test_waiting_room_confirm_admits_without_navigation() {
    let (mut controller, journal) = new_controller();

    controller.on_invite_received(event(InviteKind::WaitingRoomJoin, "r2", "u5"));
    controller.on_confirm().unwrap();

    assert_eq!(
        actions(&journal),
        vec![Call::Send(OutboundMessage::AddFromWaiting {
            room_id: RoomId::from("r2"),
            user_id: UserId::from("u5"),
        })]
    );
}

#[test]
fn test_later_invite_supersedes_unanswered_one() {
    let (mut controller, journal) = new_controller();

    controller.on_invite_received(event(InviteKind::Invite, "first", "u1"));
    let superseded =
        controller.on_invite_received(event(InviteKind::WaitingRoomJoin, "second", "u2"));

    assert_eq!(superseded.map(|i| i.room_id), Some(RoomId::from("first")));
    assert_eq!(
        controller.pending().map(|i| i.room_id.clone()),
        Some(RoomId::from("second"))
    );

    controller.on_confirm().unwrap();

    assert_eq!(
        actions(&journal),
        vec![Call::Send(OutboundMessage::AddFromWaiting {
            room_id: RoomId::from("second"),
            user_id: UserId::from("u2"),
        })]
    );
    // One chime per arrival.
    let sounds = journal
        .borrow()
        .iter()
        .filter(|call| matches!(call, Call::Sound(_)))
        .count();
    assert_eq!(sounds, 2);
}

#[test]
fn test_confirm_with_nothing_pending_is_noop() {
    let (mut controller, journal) = new_controller();

    assert_eq!(controller.on_confirm(), Ok(None));
    assert!(journal.borrow().is_empty());
}

#[test]
fn test_cancel_never_runs_action() {
    for kind in InviteKind::ALL {
        let (mut controller, journal) = new_controller();

        controller.on_invite_received(event(kind, "r1", "u1"));
        controller.on_cancel();

        assert!(controller.pending().is_none(), "{} still pending", kind);
        assert!(actions(&journal).is_empty(), "{} ran its action", kind);
    }
}

#[test]
fn test_cancel_then_confirm_is_noop() {
    let (mut controller, journal) = new_controller();

    controller.on_invite_received(event(InviteKind::Invite, "r1", "u1"));
    controller.on_cancel();

    assert!(controller.pending().is_none());
    assert_eq!(controller.on_confirm(), Ok(None));
    assert!(actions(&journal).is_empty());
}

#[test]
fn test_confirm_resolves_exactly_once() {
    let (mut controller, journal) = new_controller();

    controller.on_invite_received(event(InviteKind::Invite, "r1", "u1"));
    controller.on_confirm().unwrap();
    controller.on_confirm().unwrap();
    controller.on_cancel();

    assert_eq!(actions(&journal).len(), 2);
}
