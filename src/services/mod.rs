pub mod chatbot;
pub mod credentials;
pub mod google_translate;
pub mod languages;
pub mod openai;
pub mod translator;
