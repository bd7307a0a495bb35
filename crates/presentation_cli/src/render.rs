//! Plain-text rendering of comparison results

use std::fmt::Write;

use application::{FareListStatus, FareSnapshot};
use domain::LocationCandidate;

/// Render the offer list, or the fallback message when there is none
pub fn fares(snapshot: &FareSnapshot) -> String {
    let mut out = String::new();

    if let FareListStatus::Offers(count) = snapshot.status() {
        let cheapest = snapshot.cheapest();
        let _ = writeln!(out, "{count} rides found:");
        for offer in snapshot.offers.iter().flatten() {
            let marker = if cheapest.is_some_and(|c| std::ptr::eq(c, offer)) {
                "*"
            } else {
                " "
            };
            let _ = writeln!(out, "{marker} {offer}");
        }
        return out;
    }

    if let Some(message) = snapshot.fallback_message() {
        let _ = writeln!(out, "{message}");
    }
    out
}

/// Render numbered location candidates
pub fn locations(candidates: &[LocationCandidate]) -> String {
    if candidates.is_empty() {
        return "No locations found\n".to_string();
    }

    let mut out = String::new();
    for (index, candidate) in candidates.iter().enumerate() {
        let _ = write!(out, "{:>2}. {}", index + 1, candidate.name);
        if !candidate.address.is_empty() {
            let _ = write!(out, ", {}", candidate.address);
        }
        let _ = writeln!(
            out,
            " ({:.6}, {:.6})",
            candidate.latitude, candidate.longitude
        );
    }
    out
}
