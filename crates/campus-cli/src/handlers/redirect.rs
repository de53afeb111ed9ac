use crate::cli::RedirectArgs;
use crate::output;
use campus_core::{ClientConfig, CurrentLocation, StaticLocation};
use campus_domain::{is_same_origin, resolve_redirect};

pub fn handle(config: &ClientConfig, args: RedirectArgs) -> anyhow::Result<()> {
    let location = match StaticLocation::parse(&args.current_url) {
        Ok(location) => location,
        Err(e) => return output::output_error(&e.to_string()),
    };
    let dashboard_url = args
        .dashboard_url
        .as_deref()
        .unwrap_or_else(|| config.effective_dashboard_url());

    let target = resolve_redirect(
        args.finish_auth_url.as_deref(),
        args.next.as_deref(),
        location.current_url(),
        dashboard_url,
    );
    let next_accepted = args
        .next
        .as_deref()
        .map(|next| is_same_origin(next, location.current_url()));

    output::output_success(serde_json::json!({
        "target": target,
        "next_accepted": next_accepted,
    }))
}
