use async_trait::async_trait;

use crate::{
    battle::{
        AbilitySlot,
        Mon,
        MonHandle,
    },
    common::{
        FastHashMap,
        Id,
    },
    error::Error,
};

/// Named arguments for formatting a message.
pub type MessageArgs = Vec<(&'static str, String)>;

/// Looks up localized text for ability trigger messages.
pub trait Localizer: Send + Sync {
    /// Returns the formatted message for the key, or `None` if the key has no text.
    fn translate(&self, key: &str, args: &MessageArgs) -> Option<String>;
}

/// A [`Localizer`] over simple `{name}` templates.
#[derive(Debug, Default, Clone)]
pub struct TemplateLocalizer {
    templates: FastHashMap<String, String>,
}

impl TemplateLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A localizer containing English text for every built-in message key.
    pub fn with_defaults() -> Self {
        let mut localizer = Self::new();
        for (key, template) in [
            ("ability.immune", "It doesn't affect {mon} thanks to its {ability}!"),
            ("ability.endure", "{mon} endured the hit!"),
            ("ability.contact_damage", "{target} was hurt by {mon}'s {ability}!"),
            ("ability.steal_item", "{mon} stole {target}'s {item}!"),
            ("ability.status_immune", "{mon}'s {ability} prevents {status}!"),
            ("ability.tag_immune", "{mon}'s {ability} prevents {tag}!"),
            (
                "ability.protect_stats",
                "{mon}'s {ability} prevents its stats from being lowered!",
            ),
            ("ability.set_weather", "{mon}'s {ability} summoned {weather}!"),
            ("ability.set_terrain", "{mon}'s {ability} summoned {terrain} terrain!"),
            ("ability.intimidate", "{mon}'s {ability} affected its foes!"),
            ("ability.cure_status", "{mon}'s {ability} cured its {status}!"),
            ("ability.hurt_foes", "{mon}'s {ability} tormented its foes!"),
            ("ability.weather_damage", "{mon} was hurt by its {ability}!"),
            ("ability.trapped", "{target} can't escape because of {mon}'s {ability}!"),
            ("ability.pressure", "{mon} is exerting its {ability}!"),
            ("ability.mold_breaker", "{mon} breaks the mold!"),
            (
                "ability.neutralizing_gas",
                "Neutralizing gas filled the area!",
            ),
        ] {
            localizer.insert(key, template);
        }
        localizer
    }

    /// Inserts or replaces the template for a key.
    pub fn insert<K, T>(&mut self, key: K, template: T)
    where
        K: Into<String>,
        T: Into<String>,
    {
        self.templates.insert(key.into(), template.into());
    }
}

impl Localizer for TemplateLocalizer {
    fn translate(&self, key: &str, args: &MessageArgs) -> Option<String> {
        let mut message = self.templates.get(key)?.clone();
        for (name, value) in args {
            message = message.replace(&format!("{{{name}}}"), value);
        }
        Some(message)
    }
}

/// Observes abilities as they take effect, for systems like achievements or quests.
pub trait AbilityObserver: Send + Sync {
    fn ability_applied(&self, mon: &Mon, ability: &Id);
}

/// A request for the presentation layer to show that an ability activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationRequest {
    pub mon: MonHandle,
    pub ability: Id,
    pub slot: AbilitySlot,
}

/// A request to move a held item between two creatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTransferRequest {
    pub from: MonHandle,
    pub to: MonHandle,
    pub item: Id,
}

/// Decides whether held items may change hands.
///
/// Transfers may require asynchronous work, such as waiting on the host's item system.
#[async_trait]
pub trait ItemTransferService: Send + Sync {
    /// Checks if the transfer would be allowed, without performing any work.
    ///
    /// Used by simulated dispatch.
    fn can_transfer(&self, request: &ItemTransferRequest) -> bool {
        let _ = request;
        true
    }

    /// Approves the transfer. Returns `false` if the transfer was rejected.
    async fn transfer(&self, request: ItemTransferRequest) -> Result<bool, Error>;
}

/// An [`ItemTransferService`] that approves every transfer immediately.
#[derive(Debug, Default)]
pub struct ImmediateItemTransfers;

#[async_trait]
impl ItemTransferService for ImmediateItemTransfers {
    async fn transfer(&self, _: ItemTransferRequest) -> Result<bool, Error> {
        Ok(true)
    }
}
