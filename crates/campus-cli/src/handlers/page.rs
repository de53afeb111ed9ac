use crate::cli::PageArgs;
use crate::output;
use campus_client::HttpPageFetcher;
use campus_core::{ClientConfig, PageIndexing, PageInfo};
use campus_domain::{PagingCollection, QueryOptions, SortDirection};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Serialize)]
struct PageOutput<'a> {
    #[serde(flatten)]
    info: PageInfo,
    items: &'a [Value],
}

pub async fn handle(config: &ClientConfig, args: PageArgs) -> anyhow::Result<()> {
    let Some(url) = args.url.or_else(|| config.base_url.clone()) else {
        return output::output_error("--url is required (or set base_url in the config file)");
    };

    let timeout = Duration::from_secs(config.effective_request_timeout_secs());
    let fetcher = match HttpPageFetcher::<Value>::new(&url, timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => return output::output_error(&e.to_string()),
    };

    let zero_indexed = if args.zero_indexed {
        true
    } else if args.one_indexed {
        false
    } else {
        config.effective_zero_indexed()
    };
    let indexing = PageIndexing::from_zero_indexed(zero_indexed);

    let per_page = match args.per_page {
        Some(0) => return output::output_error("--per-page must be at least 1"),
        Some(per_page) => per_page,
        None => config.effective_per_page(),
    };

    let options = args
        .params
        .into_iter()
        .fold(QueryOptions::default(), |options, (key, value)| {
            options.with_extra(key, value)
        });

    let mut collection =
        PagingCollection::new(fetcher, indexing, per_page).with_query_options(options);
    if let Some(field) = args.sort {
        collection = collection.with_sort(field, SortDirection::default());
    }

    if let Err(e) = collection.set_page(args.page).await {
        return output::output_error(&e.to_string());
    }

    output::output_success(PageOutput {
        info: collection.page_info(),
        items: collection.items(),
    })
}
