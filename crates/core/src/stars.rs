//! Star resolution: map submitted names onto persisted stars.

use crate::error::CoreError;
use crate::movie::Star;
use crate::repository::StarStore;

/// Look up each name, creating stars that do not exist yet.
///
/// Output keeps input order. Names resolving to a star already in the
/// output are collapsed, so a shorter result means the input referenced the
/// same star twice; rejecting that is up to the caller.
pub async fn resolve_stars<S>(store: &mut S, names: &[String]) -> Result<Vec<Star>, CoreError>
where
    S: StarStore + ?Sized,
{
    let mut resolved: Vec<Star> = Vec::with_capacity(names.len());
    for name in names {
        let star = match store.find_by_name(name).await? {
            Some(existing) => existing,
            None => store.create(name).await?,
        };
        if !resolved.iter().any(|s| s.id == star.id) {
            resolved.push(star);
        }
    }
    Ok(resolved)
}
