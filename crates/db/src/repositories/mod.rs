mod note_repo;
mod user_repo;

pub use note_repo::NoteRepo;
pub use user_repo::UserRepo;
