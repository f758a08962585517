//! Split Session
//!
//! Plays a short session against the starter friends:
//! - select Lee and split a 100 bill, user paying 40
//! - try an empty bill with Drake (silently ignored)
//! - add a new friend through the add-friend panel
//!
//! Run with: RUST_LOG=splitbill=debug cargo run --example split_session

use splitbill::{Event, Friend, Payer, Session, SessionConfig, Standing};
use tracing_subscriber::EnvFilter;

fn print_friends(friends: &[Friend]) {
    for friend in friends {
        let line = match friend.standing() {
            Standing::YouOwe(amount) => format!("You owe {} ${}", friend.name, amount),
            Standing::OwesYou(amount) => format!("{} owes you ${}", friend.name, amount),
            Standing::Even => format!("You and {} are even.", friend.name),
        };
        println!("  {line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Split Session Example ===\n");

    let session = Session::new(SessionConfig::default())?;
    print_friends(session.friends());

    let lee = session.friends()[2].id;
    let drake = session.friends()[0].id;

    println!("\nSplitting 100 with Lee, you paid 40:");
    let (session, _) = session.dispatch_all([
        Event::SelectFriend(lee),
        Event::EditBillTotal(100.0),
        Event::EditUserPaid(40.0),
        Event::ChoosePayer(Payer::User),
        Event::SubmitSplit,
    ]);
    print_friends(session.friends());

    println!("\nSubmitting an empty bill with Drake:");
    let (session, _) = session.dispatch(Event::SelectFriend(drake));
    let (session, outcome) = session.dispatch(Event::SubmitSplit);
    println!("  outcome: {:?}", outcome);
    println!("  still selected: {:?}", session.selected_friend().map(|f| &f.name));

    println!("\nAdding Sara:");
    let (session, _) = session.dispatch_all([
        Event::ToggleAddFriendPanel,
        Event::EditFriendName("Sara".to_string()),
        Event::SubmitAddFriend,
    ]);
    print_friends(session.friends());

    println!(
        "\nSelection changes this session: {}",
        session.selection().history().len()
    );
    println!("\n=== Example Complete ===");
    Ok(())
}
