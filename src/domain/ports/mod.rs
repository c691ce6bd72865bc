pub mod chat_repository;
pub mod client_repository;
pub mod message_repository;
pub mod rating_repository;
pub mod staff_repository;
pub mod stats_repository;
pub mod task_repository;
pub mod work_session_repository;

pub use chat_repository::ChatRepository;
pub use client_repository::ClientRepository;
pub use message_repository::MessageRepository;
pub use rating_repository::RatingRepository;
pub use staff_repository::StaffRepository;
pub use stats_repository::StatsRepository;
pub use task_repository::TaskRepository;
pub use work_session_repository::WorkSessionRepository;
