//! Domain ordering
//!
//! Emails are ordered by the text after their first `@`, compared byte-wise
//! with no case folding. Addresses sharing a domain are ordered by the full
//! address so the output does not depend on hash set iteration order.

use std::cmp::Ordering;

use crate::dedup::EmailSet;
use crate::pattern::domain_of;

/// Compare two emails by domain, then by whole address
#[inline]
pub fn by_domain(a: &str, b: &str) -> Ordering {
    domain_of(a).cmp(domain_of(b)).then_with(|| a.cmp(b))
}

/// Sort a list of emails in place by domain
pub fn sort_by_domain(emails: &mut [String]) {
    emails.sort_by(|a, b| by_domain(a, b));
}

/// Render the set as a domain-sorted list
pub fn sorted_by_domain(set: EmailSet) -> Vec<String> {
    let mut emails = set.into_vec();
    sort_by_domain(&mut emails);
    debug_assert!(is_domain_sorted(&emails));
    emails
}

/// Check that adjacent entries never decrease in domain
pub fn is_domain_sorted(emails: &[String]) -> bool {
    emails
        .windows(2)
        .all(|pair| domain_of(&pair[0]) <= domain_of(&pair[1]))
}
