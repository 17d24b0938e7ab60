//! Tests for the document store backends
//!
//! Both backends run the same behavioural checks: upsert, insert-only
//! create, atomic update, lookup by id and query by field with insertion
//! ordering.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::migrations::run_migrations;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use sqlx::sqlite::SqlitePoolOptions;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Note {
        id: String,
        user_id: String,
        text: String,
    }

    async fn sqlite_store() -> SqliteStore {
        // a single connection keeps every query on the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        run_migrations(&pool).await.expect("migrations");
        SqliteStore::new(pool)
    }

    async fn check_upsert_and_get(store: &dyn DocumentStore) {
        assert!(store.get(Collection::Users, "U_1").await.unwrap().is_none());

        store
            .put(Collection::Users, "U_1", &json!({"id": "U_1", "email": "a@b.com"}))
            .await
            .unwrap();
        store
            .put(Collection::Users, "U_1", &json!({"id": "U_1", "email": "c@d.com"}))
            .await
            .unwrap();

        let doc = store.get(Collection::Users, "U_1").await.unwrap().unwrap();
        assert_eq!(doc["email"], "c@d.com");

        // same id in another collection is a different document
        assert!(store
            .get(Collection::Assessments, "U_1")
            .await
            .unwrap()
            .is_none());
    }

    async fn check_query(store: &dyn DocumentStore) {
        for (id, owner, active) in [("N1", "U_A", true), ("N2", "U_B", false), ("N3", "U_A", false)] {
            store
                .put(
                    Collection::Recommendations,
                    id,
                    &json!({"id": id, "user_id": owner, "active": active, "rank": 1}),
                )
                .await
                .unwrap();
        }

        let docs = store
            .query(Collection::Recommendations, "user_id", &json!("U_A"))
            .await
            .unwrap();
        let ids: Vec<&str> = docs.iter().filter_map(|d| d["id"].as_str()).collect();
        assert_eq!(ids, vec!["N1", "N3"]);

        let active = store
            .query(Collection::Recommendations, "active", &json!(true))
            .await
            .unwrap();
        assert_eq!(active.len(), 1);

        let ranked = store
            .query(Collection::Recommendations, "rank", &json!(1))
            .await
            .unwrap();
        assert_eq!(ranked.len(), 3);

        assert!(store
            .query(Collection::Recommendations, "user_id", &json!("U_NONE"))
            .await
            .unwrap()
            .is_empty());
    }

    async fn check_create_conflicts(store: &dyn DocumentStore) {
        store
            .create(Collection::Users, "U_1", &json!({"id": "U_1", "email": "a@b.com"}))
            .await
            .unwrap();

        let same_id = store
            .create(Collection::Users, "U_1", &json!({"id": "U_1", "email": "x@y.com"}))
            .await
            .unwrap_err();
        assert!(matches!(same_id, StoreError::Conflict(_)));

        let same_email = store
            .create(Collection::Users, "U_2", &json!({"id": "U_2", "email": "a@b.com"}))
            .await
            .unwrap_err();
        assert!(matches!(same_email, StoreError::Conflict(_)));

        // emails are only unique among users
        store
            .create(
                Collection::AssessmentResponses,
                "AR_1",
                &json!({"id": "AR_1", "email": "a@b.com"}),
            )
            .await
            .unwrap();

        let users = store
            .query(Collection::Users, "email", &json!("a@b.com"))
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["id"], "U_1");
    }

    async fn check_update(store: &dyn DocumentStore) {
        store
            .put(Collection::Assessments, "AS_1", &json!({"id": "AS_1", "count": 0}))
            .await
            .unwrap();

        let updated = store
            .update(
                Collection::Assessments,
                "AS_1",
                Box::new(|doc: &mut serde_json::Value| -> Result<(), StoreError> {
                    doc["count"] = json!(1);
                    Ok(())
                }),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated["count"], 1);

        let missing = store
            .update(
                Collection::Assessments,
                "AS_NONE",
                Box::new(|_: &mut serde_json::Value| Ok::<(), StoreError>(())),
            )
            .await
            .unwrap();
        assert!(missing.is_none());

        // a failing step leaves the stored document as it was
        let err = store
            .update(
                Collection::Assessments,
                "AS_1",
                Box::new(|doc: &mut serde_json::Value| -> Result<(), StoreError> {
                    doc["count"] = json!(99);
                    Err(StoreError::Backend("step failed".into()))
                }),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
        let doc = store.get(Collection::Assessments, "AS_1").await.unwrap().unwrap();
        assert_eq!(doc["count"], 1);
    }

    /// Interleaved read-modify-write increments must all land
    async fn check_concurrent_updates(store: std::sync::Arc<dyn DocumentStore>) {
        store
            .put(Collection::Assessments, "AS_C", &json!({"id": "AS_C", "count": 0}))
            .await
            .unwrap();

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .update(
                            Collection::Assessments,
                            "AS_C",
                            Box::new(|doc: &mut serde_json::Value| -> Result<(), StoreError> {
                                let count = doc["count"].as_i64().unwrap_or(0);
                                doc["count"] = json!(count + 1);
                                Ok(())
                            }),
                        )
                        .await
                        .unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let doc = store.get(Collection::Assessments, "AS_C").await.unwrap().unwrap();
        assert_eq!(doc["count"], 16);
    }

    #[tokio::test]
    async fn test_memory_store_behaviour() {
        let store = MemoryStore::new();
        check_upsert_and_get(&store).await;
        check_query(&store).await;
        check_update(&store).await;
    }

    #[tokio::test]
    async fn test_sqlite_store_behaviour() {
        let store = sqlite_store().await;
        check_upsert_and_get(&store).await;
        check_query(&store).await;
        check_update(&store).await;
    }

    #[tokio::test]
    async fn test_create_rejects_taken_id_and_email() {
        check_create_conflicts(&MemoryStore::new()).await;
        check_create_conflicts(&sqlite_store().await).await;
    }

    #[tokio::test]
    async fn test_put_keeps_user_emails_unique() {
        let store = MemoryStore::new();
        store
            .put(Collection::Users, "U_1", &json!({"id": "U_1", "email": "a@b.com"}))
            .await
            .unwrap();
        let err = store
            .put(Collection::Users, "U_2", &json!({"id": "U_2", "email": "a@b.com"}))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_are_serialized() {
        check_concurrent_updates(std::sync::Arc::new(MemoryStore::new())).await;
        check_concurrent_updates(std::sync::Arc::new(sqlite_store().await)).await;
    }

    #[tokio::test]
    async fn test_rejects_path_like_fields() {
        let store = MemoryStore::new();
        let err = store
            .query(Collection::Users, "profile.bio", &json!("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidField(_)));

        let store = sqlite_store().await;
        let err = store
            .query(Collection::Users, "email') OR 1=1 --", &json!("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidField(_)));
    }

    #[tokio::test]
    async fn test_typed_helpers() {
        let store: std::sync::Arc<dyn DocumentStore> = std::sync::Arc::new(MemoryStore::new());
        let note = Note {
            id: "N1".into(),
            user_id: "U_A".into(),
            text: "hello".into(),
        };

        store
            .put_as(Collection::AssessmentResponses, &note.id, &note)
            .await
            .unwrap();

        let loaded: Option<Note> = store
            .get_as(Collection::AssessmentResponses, "N1")
            .await
            .unwrap();
        assert_eq!(loaded, Some(note));

        let owned: Vec<Note> = store
            .query_as(Collection::AssessmentResponses, "user_id", &json!("U_A"))
            .await
            .unwrap();
        assert_eq!(owned.len(), 1);
    }

    #[tokio::test]
    async fn test_typed_get_reports_shape_mismatch() {
        let store = MemoryStore::new();
        store
            .put(Collection::AssessmentResponses, "N1", &json!({"id": 7}))
            .await
            .unwrap();

        let result: Result<Option<Note>, StoreError> =
            store.get_as(Collection::AssessmentResponses, "N1").await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
