use shared::{MemorySettingsManager, Preset, SettingsManager, TrackerSettings};

use super::logging::Logger;

const STORAGE_CHECK_KEY: &str = "__tracker_settings_check__";

/// Whether a user agent string belongs to a Chromium-based browser.
///
/// Chrome on iOS (`CriOS`) runs on WebKit and is excluded.
pub fn is_chromium_user_agent(user_agent: &str) -> bool {
    let ios = user_agent.contains("iPhone") || user_agent.contains("iPad") || user_agent.contains("CriOS/");
    let chromium = ["Chrome/", "Chromium/", "Edg/", "OPR/"]
        .iter()
        .any(|marker| user_agent.contains(marker));
    chromium && !ios
}

fn detect_chromium() -> bool {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .map(|user_agent| is_chromium_user_agent(&user_agent))
        .unwrap_or(false)
}

/// Local storage counts as available only if a write and delete succeed;
/// private browsing modes can expose a storage object that rejects writes.
fn detect_local_storage() -> bool {
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten()) else {
        return false;
    };
    storage.set_item(STORAGE_CHECK_KEY, "1").is_ok() && storage.remove_item(STORAGE_CHECK_KEY).is_ok()
}

/// Settings manager for the running browser tab
pub struct BrowserSettingsManager {
    inner: MemorySettingsManager,
}

impl BrowserSettingsManager {
    pub fn detect() -> Self {
        let chromium = detect_chromium();
        let ls_available = detect_local_storage();
        Logger::debug_with_component(
            "settings-manager",
            &format!("chromium={} ls_available={}", chromium, ls_available),
        );
        Self::from_memory(MemorySettingsManager::new(chromium, ls_available))
    }

    pub fn from_memory(inner: MemorySettingsManager) -> Self {
        Self { inner }
    }

    pub fn settings(&self) -> TrackerSettings {
        self.inner.settings()
    }

    fn log_applied(&self, preset: &str) {
        let snapshot = serde_json::to_string(&self.inner.settings())
            .unwrap_or_else(|e| format!("<unserializable: {}>", e));
        Logger::info_with_component(
            "settings-manager",
            &format!("Applied {} preset: {}", preset, snapshot),
        );
    }
}

impl SettingsManager for BrowserSettingsManager {
    fn set_defaults(&self) {
        self.inner.set_defaults();
        self.log_applied(Preset::Defaults.as_str());
    }

    fn set_lowperf(&self) {
        self.inner.set_lowperf();
        self.log_applied(Preset::LowPerformance.as_str());
    }

    fn set_streamer(&self) {
        self.inner.set_streamer();
        self.log_applied(Preset::Streamer.as_str());
    }

    fn set_classic(&self) {
        self.inner.set_classic();
        self.log_applied("classic");
    }

    fn is_chromium_browser(&self) -> bool {
        self.inner.is_chromium_browser()
    }

    fn ls_available(&self) -> bool {
        self.inner.ls_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chromium_user_agents() {
        let chrome = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
        let edge = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.2478.51";
        let android = "Mozilla/5.0 (Linux; Android 14) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.6367.82 Mobile Safari/537.36";
        assert!(is_chromium_user_agent(chrome));
        assert!(is_chromium_user_agent(edge));
        assert!(is_chromium_user_agent(android));
    }

    #[test]
    fn test_non_chromium_user_agents() {
        let firefox = "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";
        let safari = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";
        let chrome_ios = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/124.0.6367.88 Mobile/15E148 Safari/604.1";
        assert!(!is_chromium_user_agent(firefox));
        assert!(!is_chromium_user_agent(safari));
        assert!(!is_chromium_user_agent(chrome_ios));
        assert!(!is_chromium_user_agent(""));
    }
}
