pub mod folder;
pub mod paper;
pub mod paper_box;

pub use folder::Folder;
pub use paper::Paper;
pub use paper_box::PaperBox;
