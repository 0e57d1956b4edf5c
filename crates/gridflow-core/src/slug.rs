//! Compound-slug handling.
//!
//! Platform resources are addressed by `:`-joined slugs, e.g. a run is
//! `{owner}:{model}:{scenario}:{run}`.

use gridflow_api::Error;

/// Split `fullslug` into exactly `expected` parts.
pub fn parse_slug(fullslug: &str, expected: usize) -> Result<Vec<&str>, Error> {
    let parts: Vec<&str> = fullslug.split(':').collect();
    if parts.len() != expected {
        return Err(Error::Slug {
            slug: fullslug.to_owned(),
            expected,
            got: parts.len(),
        });
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn splits_expected_parts() {
        let parts = parse_slug("alice:global-power:net-zero:baseline", 4).unwrap();
        assert_eq!(parts, vec!["alice", "global-power", "net-zero", "baseline"]);
    }

    #[test]
    fn wrong_part_count_is_an_error() {
        let err = parse_slug("alice:global-power", 4).unwrap_err();
        assert!(matches!(
            err,
            Error::Slug {
                expected: 4,
                got: 2,
                ..
            }
        ));
    }
}
