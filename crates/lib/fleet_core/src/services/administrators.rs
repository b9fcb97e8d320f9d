//! Administrator service.

use tracing::info;

use super::ServiceError;
use crate::models::{Administrator, NewAdministrator};
use crate::query::{PageRequest, paginate};
use crate::store::AdministratorStore;

/// Persist a new administrator.
///
/// Fails with [`ServiceError::DuplicateKey`] when the email is taken; the store
/// is left unchanged in that case.
pub async fn add<S>(store: &S, administrator: NewAdministrator) -> Result<Administrator, ServiceError>
where
    S: AdministratorStore + ?Sized,
{
    if !administrator.role.is_assignable() {
        return Err(ServiceError::InvalidArgument("role".into()));
    }
    if store
        .find_administrator_by_email(&administrator.email)
        .await?
        .is_some()
    {
        return Err(ServiceError::DuplicateKey(administrator.email));
    }
    // The store enforces uniqueness too, for writers racing past the check.
    let created = store.insert_administrator(administrator).await?;
    info!(id = created.id, role = %created.role, "administrator created");
    Ok(created)
}

pub async fn get_by_id<S>(store: &S, id: i32) -> Result<Option<Administrator>, ServiceError>
where
    S: AdministratorStore + ?Sized,
{
    Ok(store.find_administrator(id).await?)
}

/// List administrators in identifier order, sliced by `page`.
pub async fn get_all<S>(store: &S, page: &PageRequest) -> Result<Vec<Administrator>, ServiceError>
where
    S: AdministratorStore + ?Sized,
{
    let all = store.enumerate_administrators().await?;
    Ok(paginate(all, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn add_assigns_identifier() {
        let store = MemoryStore::new();
        let created = add(&store, NewAdministrator::new("a@teste.com", "123456", Role::Editor))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        let fetched = get_by_id(&store, created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn duplicate_email_fails_without_mutating_store() {
        let store = MemoryStore::new();
        add(&store, NewAdministrator::new("a@teste.com", "one", Role::Adm))
            .await
            .unwrap();

        let err = add(&store, NewAdministrator::new("a@teste.com", "two", Role::Editor))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateKey(ref email) if email == "a@teste.com"));

        let all = get_all(&store, &PageRequest::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].password, "one");
        assert_eq!(all[0].role, Role::Adm);
    }

    #[tokio::test]
    async fn role_none_is_rejected_before_store() {
        let store = MemoryStore::new();
        let err = add(&store, NewAdministrator::new("a@teste.com", "p", Role::None))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert_eq!(store.administrator_count().await, 0);
    }

    #[tokio::test]
    async fn get_by_unknown_id_returns_none() {
        let store = MemoryStore::seeded();
        assert!(get_by_id(&store, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_paginates_in_identifier_order() {
        let store = MemoryStore::new();
        for i in 1..=7 {
            add(&store, NewAdministrator::new(format!("adm{i}@teste.com"), "p", Role::Adm))
                .await
                .unwrap();
        }
        let second = get_all(&store, &PageRequest::new(Some(2), Some(5))).await.unwrap();
        let emails: Vec<&str> = second.iter().map(|a| a.email.as_str()).collect();
        assert_eq!(emails, vec!["adm6@teste.com", "adm7@teste.com"]);

        let everything = get_all(&store, &PageRequest::new(None, Some(5))).await.unwrap();
        assert_eq!(everything.len(), 7);
    }
}
