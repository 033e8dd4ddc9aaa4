//! Idempotent find-or-create resolution against the remote group/stat
//! hierarchy.
//!
//! Names and titles are not unique on the service side, so lookups can
//! return zero, one, or several matches. Resolution folds a missing list, a
//! null list, and an empty list into the same "not found" branch, and on a
//! hit always picks the first element. The first-match rule is a known
//! ambiguity: under concurrent creation by other clients it is not
//! deterministic which resource wins, and callers that need a stable
//! identity should hold on to the resolved id instead of re-resolving by
//! name.

use std::future::Future;

use tracing::debug;

use crate::dashboard::{ApiError, DashboardClient};
use crate::domain::{Group, GroupDraft, GroupId, StatDraft, StatId, StatValue, UtcDateTime};

/// Fixed scope name under which the bundled push programs file their stats.
pub const DEFAULT_GROUP_NAME: &str = "Statline-API-Examples";

/// How a resource was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// An existing resource matched the lookup key.
    Found,
    /// No match; the resource was created from the caller's template.
    Created,
}

/// A resolved resource together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub resolution: Resolution,
}

/// Resolve a remote resource by lookup key, creating it when absent.
///
/// `lookup` yields the service's list result: `None` and `Some(vec![])` are
/// both "not found". On a non-empty result the first element is returned
/// unchanged and `create` is never called.
pub async fn resolve_or_create<T, E, L, LFut, C, CFut>(
    lookup: L,
    create: C,
) -> Result<Resolved<T>, E>
where
    L: FnOnce() -> LFut,
    LFut: Future<Output = Result<Option<Vec<T>>, E>>,
    C: FnOnce() -> CFut,
    CFut: Future<Output = Result<T, E>>,
{
    let matches = lookup().await?.unwrap_or_default();
    match matches.into_iter().next() {
        Some(first) => Ok(Resolved {
            value: first,
            resolution: Resolution::Found,
        }),
        None => Ok(Resolved {
            value: create().await?,
            resolution: Resolution::Created,
        }),
    }
}

/// Resolve a group by name, creating it when absent. Creation sends only
/// the name; the service enrolls the caller as member and admin.
pub async fn resolve_group(
    client: &DashboardClient,
    name: &str,
) -> Result<Resolved<Group>, ApiError> {
    let draft = GroupDraft::new(name)?;
    resolve_or_create(
        || async move { client.groups_by_name(name).await.map(|list| list.data) },
        || async move { client.create_group(&draft).await },
    )
    .await
}

/// Outcome of one push, for logging and assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReport {
    pub group_id: GroupId,
    pub group_resolution: Resolution,
    pub stat_id: StatId,
    pub stat_resolution: Resolution,
    pub title: String,
}

/// Push a freshly computed value to the stat `title` under `group_name`.
///
/// Applies the resolver twice, nested: the group by its fixed scope name,
/// then the stat by title within the resolved group. A missing stat is
/// created from a full draft; an existing one receives an update carrying
/// only the changed fields (value and client-set timestamp), keyed by the
/// id of the first match.
pub async fn push_stat(
    client: &DashboardClient,
    group_name: &str,
    title: &str,
    value: StatValue,
) -> Result<PushReport, ApiError> {
    let group = resolve_group(client, group_name).await?;
    debug!(group = %group.value.id, outcome = ?group.resolution, "group resolved");

    let matches = client
        .stats_by_title(group_name, title)
        .await?
        .data
        .unwrap_or_default();

    match matches.into_iter().next() {
        None => {
            let draft = StatDraft::new(title, group_name, value)?;
            let stat = client.create_stat(&group.value.id, &draft).await?;
            Ok(PushReport {
                group_id: group.value.id,
                group_resolution: group.resolution,
                stat_id: stat.id,
                stat_resolution: Resolution::Created,
                title: title.to_owned(),
            })
        }
        Some(existing) => {
            let patch = existing.patch_with(value, UtcDateTime::now())?;
            let stat = client
                .update_stat(&group.value.id, &existing.id, &patch)
                .await?;
            Ok(PushReport {
                group_id: group.value.id,
                group_resolution: group.resolution,
                stat_id: stat.id,
                stat_resolution: Resolution::Found,
                title: title.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    async fn never_create() -> Result<&'static str, ApiError> {
        panic!("create must not be called for a non-empty lookup");
    }

    #[tokio::test]
    async fn missing_list_takes_the_create_path() {
        let resolved = resolve_or_create(
            || async move { Ok::<_, ApiError>(None) },
            || async move { Ok("made") },
        )
        .await
        .expect("resolution must succeed");

        assert_eq!(resolved.resolution, Resolution::Created);
        assert_eq!(resolved.value, "made");
    }

    #[tokio::test]
    async fn empty_list_takes_the_create_path() {
        let resolved = resolve_or_create(
            || async move { Ok::<_, ApiError>(Some(Vec::<&str>::new())) },
            || async move { Ok("made") },
        )
        .await
        .expect("resolution must succeed");

        assert_eq!(resolved.resolution, Resolution::Created);
    }

    #[tokio::test]
    async fn first_match_wins_and_create_is_skipped() {
        let resolved = resolve_or_create(
            || async move { Ok::<_, ApiError>(Some(vec!["g1", "g2", "g3"])) },
            never_create,
        )
        .await
        .expect("resolution must succeed");

        assert_eq!(resolved.resolution, Resolution::Found);
        assert_eq!(resolved.value, "g1");
    }

    #[tokio::test]
    async fn repeated_resolution_never_creates_twice() {
        let creates = Cell::new(0u32);
        let creates = &creates;

        for _ in 0..2 {
            let resolved = resolve_or_create(
                || async move { Ok::<_, ApiError>(Some(vec!["g1"])) },
                || async move {
                    creates.set(creates.get() + 1);
                    Ok("fresh")
                },
            )
            .await
            .expect("resolution must succeed");
            assert_eq!(resolved.value, "g1");
        }

        assert_eq!(creates.get(), 0);
    }

    #[tokio::test]
    async fn lookup_errors_propagate() {
        let result = resolve_or_create(
            || async move { Err::<Option<Vec<&str>>, _>(ApiError::transport("connection refused")) },
            || async move { Ok("made") },
        )
        .await;

        assert!(result.is_err());
    }
}
