use crate::domain::model::{ContentType, QueryStatus};

/// Derives the final status and the single user-facing message from what the
/// providers found. Rules are evaluated top to bottom and the first match
/// wins; the order is a contract, not an implementation detail.
pub fn compose(
    requested_found: bool,
    any_content_found: bool,
    track_found: bool,
    requested: ContentType,
    title: &str,
) -> (QueryStatus, Option<String>) {
    if !any_content_found && !track_found {
        return (
            QueryStatus::NotFound,
            Some(format!(
                "No data (lyrics, chords, tabs, or backing track) found for \"{}\".",
                title
            )),
        );
    }

    if !requested_found && any_content_found {
        return (
            QueryStatus::PartialOk,
            Some(format!(
                "Could not find {} for \"{}\". Other song content might be available.",
                requested, title
            )),
        );
    }

    if !any_content_found && track_found {
        return (
            QueryStatus::PartialOk,
            Some(format!(
                "Found a backing track for \"{}\", but no lyrics, chords, or tabs.",
                title
            )),
        );
    }

    // requested_found is true here; the user got exactly what they asked for.
    (QueryStatus::Ok, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_found_anywhere() {
        let (status, message) = compose(false, false, false, ContentType::Lyrics, "Yesterday");
        assert_eq!(status, QueryStatus::NotFound);
        assert_eq!(
            message.as_deref(),
            Some("No data (lyrics, chords, tabs, or backing track) found for \"Yesterday\".")
        );
    }

    #[test]
    fn test_other_content_but_not_requested() {
        let (status, message) = compose(false, true, false, ContentType::Tabs, "Yesterday");
        assert_eq!(status, QueryStatus::PartialOk);
        assert_eq!(
            message.as_deref(),
            Some("Could not find tabs for \"Yesterday\". Other song content might be available.")
        );
    }

    #[test]
    fn test_backing_track_only() {
        let (status, message) = compose(false, false, true, ContentType::Chords, "Yesterday");
        assert_eq!(status, QueryStatus::PartialOk);
        assert_eq!(
            message.as_deref(),
            Some("Found a backing track for \"Yesterday\", but no lyrics, chords, or tabs.")
        );
    }

    #[test]
    fn test_requested_found_is_full_success() {
        let (status, message) = compose(true, true, true, ContentType::Lyrics, "Yesterday");
        assert_eq!(status, QueryStatus::Ok);
        assert!(message.is_none());

        // Track outcome is irrelevant once the requested type is present.
        let (status, message) = compose(true, true, false, ContentType::Lyrics, "Yesterday");
        assert_eq!(status, QueryStatus::Ok);
        assert!(message.is_none());
    }

    #[test]
    fn test_missing_requested_type_wins_over_track_message() {
        // Rule 2 fires before rule 3 when other content and a track coexist.
        let (status, message) = compose(false, true, true, ContentType::Tabs, "Yesterday");
        assert_eq!(status, QueryStatus::PartialOk);
        assert_eq!(
            message.as_deref(),
            Some("Could not find tabs for \"Yesterday\". Other song content might be available.")
        );
    }
}
