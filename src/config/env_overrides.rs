use super::Config;
use std::collections::BTreeMap;

fn non_empty<'a>(vars: &'a BTreeMap<String, String>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| vars.get(*name))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(&crate::env_guard::process_env());
    }

    /// Overlay values from an environment snapshot. Unparseable numbers are
    /// ignored rather than fatal.
    pub fn apply_env_overrides_from(&mut self, vars: &BTreeMap<String, String>) {
        if let Some(key) = non_empty(vars, &["OPENAI_API_KEY"]) {
            self.backend.api_key = Some(key.to_string());
        }

        if let Some(model) = non_empty(vars, &["OPENAI_MODEL"]) {
            self.backend.model = model.to_string();
        }

        if let Some(base_url) = non_empty(vars, &["OPENAI_BASE_URL"]) {
            self.backend.base_url = base_url.to_string();
        }

        if let Some(effort) = vars.get("OPENAI_REASONING_EFFORT") {
            self.backend.reasoning_effort = effort.trim().to_string();
        }

        if let Some(timeout) = non_empty(vars, &["OPENAI_TIMEOUT_SECS"])
            && let Ok(secs) = timeout.parse::<u64>()
            && secs > 0
        {
            self.backend.timeout_secs = secs;
        }

        if let Some(host) = non_empty(vars, &["AGENT_FACTORY_HOST", "HOST"]) {
            self.gateway.host = host.to_string();
        }

        if let Some(port) = non_empty(vars, &["AGENT_FACTORY_PORT", "PORT"])
            && let Ok(port) = port.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Some(origin) = non_empty(vars, &["ALLOW_ORIGIN"]) {
            self.gateway.allow_origin = origin.to_string();
        }
    }
}
