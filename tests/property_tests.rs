//! Property-based tests for the registry, selection and split calculator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use splitbill::{
    compute_delta, Event, FriendId, FriendRegistry, Outcome, Payer, Selection,
    SelectionController, Session, SessionBuilder,
};
use std::collections::HashSet;

prop_compose! {
    /// A bill and a user share that fits in it, both positive, in whole cents.
    fn bill_and_share()(bill_cents in 1u32..1_000_000)(
        bill_cents in Just(bill_cents),
        share_cents in 1..=bill_cents,
    ) -> (f64, f64) {
        (f64::from(bill_cents) / 100.0, f64::from(share_cents) / 100.0)
    }
}

fn arbitrary_payer() -> impl Strategy<Value = Payer> {
    prop_oneof![Just(Payer::User), Just(Payer::Friend)]
}

#[derive(Clone, Debug)]
enum SelectionOp {
    Toggle,
    Open,
    Select(usize),
    Clear,
    Close,
}

fn arbitrary_op() -> impl Strategy<Value = SelectionOp> {
    prop_oneof![
        Just(SelectionOp::Toggle),
        Just(SelectionOp::Open),
        (0usize..3).prop_map(SelectionOp::Select),
        Just(SelectionOp::Clear),
        Just(SelectionOp::Close),
    ]
}

fn session_with(balance: f64) -> (Session, FriendId) {
    let id = FriendId::new();
    let session = SessionBuilder::new()
        .friend_with_id(id, "Pat", "https://i.pravatar.cc/48?u=1", balance)
        .build()
        .unwrap();
    (session, id)
}

proptest! {
    #[test]
    fn added_friend_ids_are_distinct(names in prop::collection::vec("[a-z]{1,8}", 1..40)) {
        let mut registry = FriendRegistry::new();
        for name in &names {
            let (next, _) = registry.add_friend(name.as_str(), "avatar");
            registry = next;
        }

        let ids: HashSet<_> = registry.list_friends().iter().map(|f| f.id).collect();
        prop_assert_eq!(ids.len(), names.len());
    }

    #[test]
    fn registry_preserves_insertion_order(names in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let mut registry = FriendRegistry::new();
        for name in &names {
            let (next, _) = registry.add_friend(name.as_str(), "avatar");
            registry = next;
        }

        let listed: Vec<_> = registry.list_friends().iter().map(|f| f.name.clone()).collect();
        prop_assert_eq!(listed, names);
    }

    #[test]
    fn user_paying_adds_friend_share(
        balance in -1000i32..1000,
        (bill, share) in bill_and_share(),
    ) {
        let balance = f64::from(balance);
        let (session, id) = session_with(balance);

        let (session, _) = session.dispatch_all([
            Event::SelectFriend(id),
            Event::EditBillTotal(bill),
            Event::EditUserPaid(share),
            Event::ChoosePayer(Payer::User),
            Event::SubmitSplit,
        ]);

        let settled = session.registry().get(id).unwrap().balance;
        prop_assert_eq!(settled, balance + (bill - share));
        prop_assert_eq!(session.selection().current(), Selection::NoSelection);
    }

    #[test]
    fn friend_paying_subtracts_user_share(
        balance in -1000i32..1000,
        (bill, share) in bill_and_share(),
    ) {
        let balance = f64::from(balance);
        let (session, id) = session_with(balance);

        let (session, _) = session.dispatch_all([
            Event::SelectFriend(id),
            Event::EditBillTotal(bill),
            Event::EditUserPaid(share),
            Event::ChoosePayer(Payer::Friend),
            Event::SubmitSplit,
        ]);

        let settled = session.registry().get(id).unwrap().balance;
        prop_assert_eq!(settled, balance - share);
    }

    #[test]
    fn delta_sign_follows_payer((bill, share) in bill_and_share(), payer in arbitrary_payer()) {
        let delta = compute_delta(bill, share, payer);
        match payer {
            Payer::User => prop_assert!(delta >= 0.0),
            Payer::Friend => prop_assert!(delta < 0.0),
        }
    }

    #[test]
    fn selecting_twice_deselects(ops in prop::collection::vec(arbitrary_op(), 0..10)) {
        let ids = [FriendId::new(), FriendId::new(), FriendId::new()];
        let controller = apply_ops(SelectionController::new(), &ops, &ids);
        prop_assume!(!controller.is_selected(ids[0]));

        let twice = controller.select_friend(ids[0]).select_friend(ids[0]);
        prop_assert_eq!(twice.current(), Selection::NoSelection);
    }

    #[test]
    fn selecting_always_closes_panel(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in 0usize..3,
    ) {
        let ids = [FriendId::new(), FriendId::new(), FriendId::new()];
        let controller = apply_ops(SelectionController::new(), &ops, &ids);

        prop_assert!(!controller.select_friend(ids[target]).is_add_panel_open());
    }

    #[test]
    fn panel_can_open_from_any_state(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let ids = [FriendId::new(), FriendId::new(), FriendId::new()];
        let controller = apply_ops(SelectionController::new(), &ops, &ids);

        let opened = controller.open_add_friend_panel();
        prop_assert!(opened.is_add_panel_open());
        prop_assert_eq!(opened.selected_friend(), None);
    }

    #[test]
    fn history_path_ends_at_current(ops in prop::collection::vec(arbitrary_op(), 1..20)) {
        let ids = [FriendId::new(), FriendId::new(), FriendId::new()];
        let controller = apply_ops(SelectionController::new(), &ops, &ids);

        let path = controller.history().get_path();
        if let Some(last) = path.last() {
            prop_assert_eq!(**last, controller.current());
        } else {
            prop_assert_eq!(controller.current(), Selection::NoSelection);
        }
    }

    #[test]
    fn user_share_never_exceeds_bill(bill in 0u32..10_000, share in 0u32..20_000) {
        let (session, id) = session_with(0.0);
        let (bill, share) = (f64::from(bill), f64::from(share));

        let (session, outcomes) = session.dispatch_all([
            Event::SelectFriend(id),
            Event::EditBillTotal(bill),
            Event::EditUserPaid(share),
        ]);

        let draft = session.split_draft().unwrap();
        if share > bill {
            prop_assert_eq!(draft.user_paid(), None);
            prop_assert_eq!(&outcomes[2], &Outcome::Unchanged);
        } else {
            prop_assert_eq!(draft.user_paid(), Some(share));
        }
    }

    #[test]
    fn dispatch_never_mutates_receiver(bill in 0u32..500) {
        let (session, id) = session_with(3.0);
        let before = session.clone();

        let (_after, _) = session.dispatch_all([
            Event::SelectFriend(id),
            Event::EditBillTotal(f64::from(bill)),
            Event::EditUserPaid(1.0),
            Event::SubmitSplit,
        ]);

        prop_assert_eq!(&session, &before);
        prop_assert_eq!(session.registry().get(id).unwrap().balance, 3.0);
    }
}

fn apply_ops(
    controller: SelectionController,
    ops: &[SelectionOp],
    ids: &[FriendId; 3],
) -> SelectionController {
    ops.iter().fold(controller, |controller, op| match op {
        SelectionOp::Toggle => controller.toggle_add_friend_panel(),
        SelectionOp::Open => controller.open_add_friend_panel(),
        SelectionOp::Select(i) => controller.select_friend(ids[*i]),
        SelectionOp::Clear => controller.clear_selection(),
        SelectionOp::Close => controller.close_add_friend_panel(),
    })
}
