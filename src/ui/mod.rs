pub mod chat_page;
pub mod html;
pub mod translate_page;
