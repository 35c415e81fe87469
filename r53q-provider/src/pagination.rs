//! Lazy streams over paginated listings
//!
//! A stream requests its first page on first poll and each further page only
//! after the consumer has drained the previous one. Dropping the stream early
//! stops all further requests. Streams are not restartable: calling
//! [`hosted_zones`] again starts over from the first page.

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use crate::error::{ProviderError, Result};
use crate::traits::DnsProvider;
use crate::types::{HostedZone, PaginatedResponse, RecordSetCursor, ResourceRecordSet};

/// Where the next fetch starts
enum Cursor<C> {
    Start,
    Next(C),
    Done,
}

/// Walk every page produced by `fetch`, yielding items in page order.
fn paginate<'a, T, C, F, Fut>(fetch: F) -> BoxStream<'a, Result<T>>
where
    T: Send + 'a,
    C: Send + 'a,
    F: FnMut(Option<C>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<PaginatedResponse<T, C>>> + Send + 'a,
{
    stream::try_unfold((Cursor::Start, fetch), |(cursor, mut fetch)| async move {
        let start = match cursor {
            Cursor::Start => None,
            Cursor::Next(c) => Some(c),
            Cursor::Done => return Ok(None),
        };
        let page = fetch(start).await?;
        let next = page.next_cursor.map_or(Cursor::Done, Cursor::Next);
        let items = stream::iter(page.items.into_iter().map(Ok::<T, ProviderError>));
        Ok::<_, ProviderError>(Some((items, (next, fetch))))
    })
    .try_flatten()
    .boxed()
}

/// Every hosted zone visible to the provider's credentials, in provider order.
pub fn hosted_zones(provider: &dyn DnsProvider) -> BoxStream<'_, Result<HostedZone>> {
    paginate(move |marker: Option<String>| async move {
        provider.list_hosted_zones(marker.as_deref()).await
    })
}

/// Every record set in one hosted zone, in provider order.
pub fn record_sets<'a>(
    provider: &'a dyn DnsProvider,
    zone_id: &'a str,
) -> BoxStream<'a, Result<ResourceRecordSet>> {
    paginate(move |cursor: Option<RecordSetCursor>| async move {
        provider.list_record_sets(zone_id, cursor.as_ref()).await
    })
}
