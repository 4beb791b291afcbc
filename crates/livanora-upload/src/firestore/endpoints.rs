//! Firestore REST URL builders

/// Build the resource path of a document, relative to the API root
pub fn document_path(project_id: &str, database_id: &str, collection: &str, document_id: &str) -> String {
    format!(
        "projects/{}/databases/{}/documents/{}/{}",
        project_id,
        database_id,
        urlencoding::encode(collection),
        urlencoding::encode(document_id)
    )
}

/// Build the full URL of a document
pub fn document_url(
    base_url: &str,
    project_id: &str,
    database_id: &str,
    collection: &str,
    document_id: &str,
) -> String {
    format!(
        "{}/v1/{}",
        base_url.trim_end_matches('/'),
        document_path(project_id, database_id, collection, document_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url() {
        assert_eq!(
            document_url(
                "https://firestore.googleapis.com/",
                "livanora-305c9",
                "(default)",
                "impulses",
                "IMP-001"
            ),
            "https://firestore.googleapis.com/v1/projects/livanora-305c9/databases/(default)/documents/impulses/IMP-001"
        );
    }

    #[test]
    fn test_document_id_is_percent_encoded() {
        assert_eq!(
            document_path("p", "(default)", "tags", "über gang"),
            "projects/p/databases/(default)/documents/tags/%C3%BCber%20gang"
        );
    }
}
