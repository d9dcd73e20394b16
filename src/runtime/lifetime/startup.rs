use std::sync::Arc;

use tracing::{debug, info};

use crate::api::services::ShortenSettings;
use crate::config::StaticConfig;
use crate::services::{LinkService, RandomAliasGenerator};
use crate::storage::UrlIndex;

pub struct StartupContext {
    pub index: Arc<UrlIndex>,
    pub link_service: Arc<LinkService>,
    pub shorten_settings: ShortenSettings,
}

/// 准备服务器启动的上下文
///
/// The index is created empty here and lives exactly as long as the server
/// holding the returned handles.
pub fn prepare_server_startup(config: &StaticConfig) -> StartupContext {
    debug!("Starting pre-startup processing...");

    let index = Arc::new(UrlIndex::new());
    let link_service = Arc::new(
        LinkService::new(
            index.clone(),
            Arc::new(RandomAliasGenerator),
            config.server.response_prefix.clone(),
        )
        .with_max_alias_attempts(config.links.max_alias_attempts),
    );
    let shorten_settings = ShortenSettings::from(&config.server);

    info!(
        "Short URLs will be served under {}/ (strict content type: {})",
        link_service.response_prefix(),
        shorten_settings.strict_content_type
    );

    StartupContext {
        index,
        link_service,
        shorten_settings,
    }
}
