mod available_rides;
mod current_trip;
mod earnings;

pub use available_rides::AvailableRides;
pub use current_trip::CurrentTrip;
pub use earnings::Earnings;

use dioxus::prelude::*;
use shared_types::SessionUser;
use shared_ui::{Notice, NoticeTone};

use crate::auth::use_auth;

/// Why a driver cannot take rides right now, if anything stops them.
pub(crate) fn driving_blocker(user: &SessionUser) -> Option<(NoticeTone, &'static str, &'static str)> {
    if user.is_blocked {
        Some((
            NoticeTone::Danger,
            "Account blocked",
            "An administrator blocked this account. Contact support to restore access.",
        ))
    } else if !user.is_approved {
        Some((
            NoticeTone::Warning,
            "Awaiting approval",
            "An administrator has to approve your vehicle before you can accept rides.",
        ))
    } else {
        None
    }
}

/// Banner shown above driver pages while the account cannot drive.
#[component]
fn DriverStatusNotice() -> Element {
    let auth = use_auth();
    let blocker = auth.current_user.read().as_ref().and_then(driving_blocker);

    match blocker {
        Some((tone, title, body)) => rsx! {
            Notice { tone, title: "{title}", "{body}" }
        },
        None => rsx! {},
    }
}
