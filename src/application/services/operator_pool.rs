use crate::domain::errors::DomainResult;
use crate::domain::ports::StaffRepository;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Selection policy over the candidate set. The pool owns fetching the
/// on-line set; strategies only choose from it.
pub trait SelectionStrategy: Send + Sync {
    fn select(&self, candidates: &[String]) -> Option<String>;
}

/// Uniform random selection; ties broken arbitrarily by construction.
pub struct RandomSelection;

impl SelectionStrategy for RandomSelection {
    fn select(&self, candidates: &[String]) -> Option<String> {
        candidates.choose(&mut rand::thread_rng()).cloned()
    }
}

/// Tracks which staff are eligible for new chat assignment. Reads the
/// on_line flag through the staff repository; never writes it.
#[derive(Clone)]
pub struct OperatorPool {
    staff_repo: Arc<dyn StaffRepository>,
    strategy: Arc<dyn SelectionStrategy>,
}

impl OperatorPool {
    pub fn new(staff_repo: Arc<dyn StaffRepository>) -> Self {
        Self::with_strategy(staff_repo, Arc::new(RandomSelection))
    }

    pub fn with_strategy(
        staff_repo: Arc<dyn StaffRepository>,
        strategy: Arc<dyn SelectionStrategy>,
    ) -> Self {
        Self {
            staff_repo,
            strategy,
        }
    }

    /// Ids of staff currently eligible for assignment.
    pub async fn available_operators(&self) -> DomainResult<Vec<String>> {
        let staff = self.staff_repo.list_online_staff().await?;
        Ok(staff.into_iter().map(|s| s.id).collect())
    }

    /// Pick an available operator, optionally excluding one (used by
    /// transfer-to-next). An empty pool yields None, not an error.
    pub async fn pick_available(&self, exclude: Option<&str>) -> DomainResult<Option<String>> {
        let mut candidates = self.available_operators().await?;
        if let Some(excluded) = exclude {
            candidates.retain(|id| id != excluded);
        }
        Ok(self.strategy.select(&candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Staff, StaffUpdate};
    use crate::domain::errors::DomainResult;

    struct FixedStaff(Vec<Staff>);

    fn online(id: &str) -> Staff {
        let mut s = Staff::new(
            format!("login-{}", id),
            format!("Operator {}", id),
            "operator".to_string(),
            serde_json::json!({}),
        );
        s.id = id.to_string();
        s.on_line = true;
        s
    }

    #[async_trait::async_trait]
    impl StaffRepository for FixedStaff {
        async fn create_staff(&self, _staff: &Staff) -> DomainResult<()> {
            unimplemented!()
        }
        async fn get_staff_by_id(&self, id: &str) -> DomainResult<Option<Staff>> {
            Ok(self.0.iter().find(|s| s.id == id).cloned())
        }
        async fn get_staff_by_login(&self, _login: &str) -> DomainResult<Option<Staff>> {
            unimplemented!()
        }
        async fn list_staff(&self) -> DomainResult<Vec<Staff>> {
            Ok(self.0.clone())
        }
        async fn list_online_staff(&self) -> DomainResult<Vec<Staff>> {
            Ok(self.0.iter().filter(|s| s.on_line).cloned().collect())
        }
        async fn update_staff(&self, _id: &str, _update: &StaffUpdate) -> DomainResult<Staff> {
            unimplemented!()
        }
    }

    struct PickFirst;

    impl SelectionStrategy for PickFirst {
        fn select(&self, candidates: &[String]) -> Option<String> {
            candidates.first().cloned()
        }
    }

    #[tokio::test]
    async fn empty_pool_yields_none() {
        let pool = OperatorPool::new(Arc::new(FixedStaff(vec![])));
        assert_eq!(pool.pick_available(None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn picks_only_online_staff() {
        let mut offline = online("b");
        offline.on_line = false;
        let pool = OperatorPool::with_strategy(
            Arc::new(FixedStaff(vec![online("a"), offline])),
            Arc::new(PickFirst),
        );
        assert_eq!(
            pool.pick_available(None).await.unwrap(),
            Some("a".to_string())
        );
    }

    #[tokio::test]
    async fn exclusion_is_honored() {
        let pool = OperatorPool::with_strategy(
            Arc::new(FixedStaff(vec![online("a"), online("b")])),
            Arc::new(PickFirst),
        );
        assert_eq!(
            pool.pick_available(Some("a")).await.unwrap(),
            Some("b".to_string())
        );
    }

    #[tokio::test]
    async fn excluding_the_only_candidate_yields_none() {
        let pool = OperatorPool::new(Arc::new(FixedStaff(vec![online("a")])));
        assert_eq!(pool.pick_available(Some("a")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn random_selection_stays_within_candidates() {
        let pool = OperatorPool::new(Arc::new(FixedStaff(vec![
            online("a"),
            online("b"),
            online("c"),
        ])));
        for _ in 0..20 {
            let picked = pool.pick_available(None).await.unwrap().unwrap();
            assert!(["a", "b", "c"].contains(&picked.as_str()));
        }
    }
}
