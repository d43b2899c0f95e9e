//! In-memory deployment and publication record stores.

use std::collections::HashMap;
use std::sync::RwLock;

use sitesmith_core::{
    application::{
        ports::{DeploymentStore, PublicationStore},
        ApplicationError,
    },
    domain::{DeploymentRecord, PublicationRecord},
    error::SitesmithResult,
};

fn poisoned() -> ApplicationError {
    ApplicationError::StoreError {
        reason: "record store lock poisoned".into(),
    }
}

#[derive(Default)]
pub struct InMemoryDeploymentStore {
    records: RwLock<HashMap<String, DeploymentRecord>>,
}

impl InMemoryDeploymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeploymentStore for InMemoryDeploymentStore {
    fn upsert(&self, record: &DeploymentRecord) -> SitesmithResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> SitesmithResult<DeploymentRecord> {
        let records = self.records.read().map_err(|_| poisoned())?;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| ApplicationError::RecordNotFound { id: id.to_string() }.into())
    }

    fn for_artifact(&self, artifact_id: &str) -> SitesmithResult<Vec<DeploymentRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let mut matches: Vec<DeploymentRecord> = records
            .values()
            .filter(|r| r.artifact_id == artifact_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matches)
    }
}

#[derive(Default)]
pub struct InMemoryPublicationStore {
    records: RwLock<HashMap<String, PublicationRecord>>,
}

impl InMemoryPublicationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PublicationStore for InMemoryPublicationStore {
    fn upsert(&self, record: &PublicationRecord) -> SitesmithResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> SitesmithResult<PublicationRecord> {
        let records = self.records.read().map_err(|_| poisoned())?;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| ApplicationError::RecordNotFound { id: id.to_string() }.into())
    }

    fn for_artifact(&self, artifact_id: &str) -> SitesmithResult<Vec<PublicationRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        let mut matches: Vec<PublicationRecord> = records
            .values()
            .filter(|r| r.artifact_id == artifact_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesmith_core::domain::{DeployConfig, Provider};

    fn record() -> DeploymentRecord {
        DeploymentRecord::new("artifact-1", Provider::Netlify, DeployConfig::new("acme"))
    }

    #[test]
    fn upsert_replaces_by_id() {
        let store = InMemoryDeploymentStore::new();
        let mut rec = record();
        store.upsert(&rec).unwrap();
        rec.start_build().unwrap();
        store.upsert(&rec).unwrap();
        let fetched = store.get(&rec.id).unwrap();
        assert_eq!(fetched.state(), rec.state());
        assert_eq!(store.for_artifact("artifact-1").unwrap().len(), 1);
    }

    #[test]
    fn missing_record_is_not_found() {
        let store = InMemoryDeploymentStore::new();
        assert!(store.get("nope").is_err());
    }

    #[test]
    fn history_is_scoped_to_artifact() {
        let store = InMemoryDeploymentStore::new();
        store.upsert(&record()).unwrap();
        store.upsert(&record()).unwrap();
        assert_eq!(store.for_artifact("artifact-1").unwrap().len(), 2);
        assert!(store.for_artifact("artifact-2").unwrap().is_empty());
    }
}
