use super::*;

#[test]
fn new_session_has_no_location() {
    let session = SessionContext::default();
    assert!(!session.location_attempted());
    assert_eq!(session.location(), None);
}

#[test]
fn location_attempt_is_claimed_once() {
    let session = SessionContext::default();
    assert!(session.begin_location_attempt());
    assert!(!session.begin_location_attempt());
    assert!(session.location_attempted());
}

#[test]
fn first_recorded_location_wins() {
    let session = SessionContext::default();
    let kl = Coordinates { latitude: 3.139, longitude: 101.6869 };
    let pj = Coordinates { latitude: 3.1073, longitude: 101.6067 };
    assert!(session.record_location(kl));
    assert!(!session.record_location(pj));
    assert_eq!(session.location(), Some(kl));
}
