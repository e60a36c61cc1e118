//! Ports - trait boundaries between the engine and the outside world.

mod banker_llm;
mod game_registry;

pub use banker_llm::{
    BankerLlm, ConversationRequest, IntentRequest, LlmError, OfferLine, OfferLineRequest,
};
pub use game_registry::{GameRegistry, RegistryError, SharedSession};
