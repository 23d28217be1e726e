pub mod handle_chat_turn;
