use std::{future::Future, sync::Arc};

use flume::Sender;
use tracing::{error, info};

use crate::{
    event::events::Event,
    http::{CHART_DATA, CONTENT, ContentSource, INSPIRATIONS, SLIDES, error::ApiError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartQuery {
    pub kod: String,
    pub start_day: u32,
}

pub async fn logged<T, F>(endpoint: &'static str, request: F) -> Option<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match request.await {
        Ok(value) => Some(value),
        Err(e) => {
            error!(endpoint, error = %e, "fetch_failed");
            None
        }
    }
}

pub async fn fetch_chart(source: &dyn ContentSource, query: &ChartQuery, tx: &Sender<Event>) {
    if let Some(data) = logged(
        CHART_DATA,
        source.fetch_chart_data(&query.kod, query.start_day),
    )
    .await
    {
        let _ = tx.send_async(Event::ChartDataFetched(data)).await;
    }
}

pub async fn refresh_all(
    source: Arc<dyn ContentSource>,
    chart: Option<ChartQuery>,
    tx: Sender<Event>,
) {
    info!("content_refresh");

    if let Some(query) = &chart {
        fetch_chart(source.as_ref(), query, &tx).await;
    }
    if let Some(inspirations) = logged(INSPIRATIONS, source.fetch_inspirations()).await {
        let _ = tx.send_async(Event::InspirationsFetched(inspirations)).await;
    }
    if let Some(slides) = logged(SLIDES, source.fetch_slides()).await {
        let _ = tx.send_async(Event::SlidesFetched(slides)).await;
    }
    if let Some(content) = logged(CONTENT, source.fetch_content()).await {
        let _ = tx.send_async(Event::ContentFetched(content)).await;
    }
}
