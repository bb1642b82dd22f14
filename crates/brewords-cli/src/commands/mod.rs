pub mod avatar;
pub mod init;
pub mod login;
pub mod logout;
pub mod play;
pub mod profile;
pub mod register;
pub mod settings;
pub mod topic;
pub mod topics;
pub mod validate;
pub mod vocabulary;

use std::path::PathBuf;

use anyhow::Result;

use brewords_client::config::{create_client, create_source, load_config_from};
use brewords_client::{ApiClient, BrewordsConfig, FileTokenStore};
use brewords_core::session::SessionContext;
use brewords_core::traits::{DataSource, Notifier};

/// Options accepted before the subcommand.
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub pack: Option<PathBuf>,
}

/// Everything a command needs to talk to the backend.
pub struct Context {
    pub config: BrewordsConfig,
    pub client: ApiClient,
    pub store: FileTokenStore,
}

impl Context {
    pub fn load(opts: &GlobalOpts) -> Result<Self> {
        let mut config = load_config_from(opts.config.as_deref())?;
        if let Some(pack) = &opts.pack {
            config.pack = Some(pack.clone());
        }
        let client = create_client(&config)?;
        let store = FileTokenStore::new(config.token_path.clone());
        Ok(Self {
            config,
            client,
            store,
        })
    }

    /// The content source, carrying the stored token when it is the backend.
    pub fn into_source(self) -> Result<(BrewordsConfig, Box<dyn DataSource>)> {
        if self.client.token().is_none() {
            let session = SessionContext::restore(&self.store)?;
            self.client.set_token(session.token().map(str::to_string));
        }
        let source = create_source(&self.config, self.client)?;
        Ok((self.config, source))
    }
}

/// Prints notifications to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        eprintln!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("! {message}");
    }
}
