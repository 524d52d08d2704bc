use super::client::GeminiClient;
use crate::config::GenAiConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Keyed memoization of authenticated clients: credential -> shared handle,
/// created lazily, never invalidated. Callers that bring their own API key
/// get their own client; everyone else shares the configured one. The pool
/// itself is cheap to share behind an `Arc`.
pub struct ClientPool {
    template: GenAiConfig,
    clients: Mutex<HashMap<String, Arc<GeminiClient>>>,
}

impl ClientPool {
    pub fn new(template: GenAiConfig) -> Self {
        Self {
            template,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch or create the client for the given credential override. `None`
    /// selects the configured credential. The key is held only as a map
    /// index and is never logged.
    pub fn client_for(&self, api_key: Option<&str>) -> Arc<GeminiClient> {
        let key = api_key.unwrap_or(&self.template.api_key);

        let mut clients = self.clients.lock().expect("client pool lock poisoned");
        if let Some(client) = clients.get(key) {
            return Arc::clone(client);
        }

        debug!("Creating new upstream client session");
        let client = Arc::new(GeminiClient::new(GenAiConfig {
            api_key: key.to_string(),
            ..self.template.clone()
        }));
        clients.insert(key.to_string(), Arc::clone(&client));
        client
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.clients.lock().unwrap().len()
    }
}
