use crate::api::models::AdminSubmissionsPage;

/// The admin submissions page starts empty: the load happens without an
/// auth token, and the page itself fetches the real data client-side once
/// it has one.
pub fn load() -> AdminSubmissionsPage {
    AdminSubmissionsPage { data: vec![] }
}
