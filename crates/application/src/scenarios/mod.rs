//! Canonical scenarios against the item API.
//!
//! Each scenario creates its own item, runs its follow-up calls, and
//! returns a `ScenarioReport`. None of them share state, so the test
//! runner may run them concurrently.

pub mod fixtures;

use itemcheck_domain::{ItemRequest, ItemResponse};

use crate::error::ApplicationResult;
use crate::item_api::ItemApi;
use crate::ports::HttpClient;
use crate::scenario::{ScenarioReport, ScenarioRun};

/// Creates an item and checks that an identifier comes back.
///
/// If the service echoes the full item, its name and price are compared
/// with what was sent.
pub async fn create_item<C: HttpClient>(api: &ItemApi<C>, item: &ItemRequest) -> ScenarioReport {
    let mut run = ScenarioRun::new("create item");
    let outcome = create_item_steps(api, item, &mut run).await;
    run.finish(outcome)
}

async fn create_item_steps<C: HttpClient>(
    api: &ItemApi<C>,
    item: &ItemRequest,
    run: &mut ScenarioRun,
) -> ApplicationResult<()> {
    let created = run.call(api.create_item(item)).await?;
    run.check()
        .not_blank("created id", created.value.id().as_str());
    if let Some(echo) = created.value.item() {
        check_matches_request(run, "created item", echo, item);
    }
    Ok(())
}

/// Creates an item, then fetches it by identifier.
///
/// The list must be non-empty and its first element must carry the
/// identifier returned at creation.
pub async fn create_and_fetch_by_id<C: HttpClient>(
    api: &ItemApi<C>,
    item: &ItemRequest,
) -> ScenarioReport {
    let mut run = ScenarioRun::new("create and fetch by id");
    let outcome = fetch_by_id_steps(api, item, &mut run).await;
    run.finish(outcome)
}

async fn fetch_by_id_steps<C: HttpClient>(
    api: &ItemApi<C>,
    item: &ItemRequest,
    run: &mut ScenarioRun,
) -> ApplicationResult<()> {
    let created = run.call(api.create_item(item)).await?;
    let id = created.value.id();
    run.check().not_blank("created id", id.as_str());

    let fetched = run.call(api.get_item(id)).await?;
    let first = run.check().require_first("items", &fetched.value)?;
    run.check().equals("items[0].id", id.as_str(), first.id.as_str());
    Ok(())
}

/// Creates an item, then lists its seller's items.
///
/// The created identifier must be in the list with the name and price
/// that were sent.
pub async fn create_and_list_by_seller<C: HttpClient>(
    api: &ItemApi<C>,
    item: &ItemRequest,
) -> ScenarioReport {
    let mut run = ScenarioRun::new("create and list by seller");
    let outcome = list_by_seller_steps(api, item, &mut run).await;
    run.finish(outcome)
}

async fn list_by_seller_steps<C: HttpClient>(
    api: &ItemApi<C>,
    item: &ItemRequest,
    run: &mut ScenarioRun,
) -> ApplicationResult<()> {
    let created = run.call(api.create_item(item)).await?;
    let id = created.value.id();

    let listed = run.call(api.get_items_by_seller(item.seller_id)).await?;
    run.check().not_empty("seller items", &listed.value);
    let found = run
        .check()
        .find("seller items", &listed.value, id.as_str(), |i| i.id.as_str());
    if let Some(found) = found {
        check_matches_request(run, "listed item", found, item);
    }
    Ok(())
}

/// Creates an item, then fetches its statistics.
///
/// Either response shape is accepted; the result must be non-empty and
/// every counter of every entry must be non-negative.
pub async fn create_and_fetch_statistics<C: HttpClient>(
    api: &ItemApi<C>,
    item: &ItemRequest,
) -> ScenarioReport {
    let mut run = ScenarioRun::new("create and fetch statistics");
    let outcome = statistics_steps(api, item, &mut run).await;
    run.finish(outcome)
}

async fn statistics_steps<C: HttpClient>(
    api: &ItemApi<C>,
    item: &ItemRequest,
    run: &mut ScenarioRun,
) -> ApplicationResult<()> {
    let created = run.call(api.create_item(item)).await?;
    let id = created.value.id();
    run.check().not_blank("created id", id.as_str());

    let reply = run.call(api.get_statistics(id)).await?;
    let statistics = reply.value.into_vec();
    run.check().require_first("statistics", &statistics)?;
    for (index, entry) in statistics.iter().enumerate() {
        for (field, value) in entry.counters() {
            run.check()
                .at_least(&format!("statistics[{index}].{field}"), 0, value);
        }
    }
    Ok(())
}

fn check_matches_request(run: &mut ScenarioRun, subject: &str, actual: &ItemResponse, sent: &ItemRequest) {
    run.check()
        .equals(&format!("{subject}.name"), sent.name.as_str(), actual.name.as_str());
    run.check()
        .equals(&format!("{subject}.price"), &sent.price, &actual.price);
}
