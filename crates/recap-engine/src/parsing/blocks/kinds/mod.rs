pub mod atx_heading;
pub mod bullet;
pub mod paragraph;
pub mod setext;

pub use atx_heading::AtxHeading;
pub use bullet::Bullet;
pub use paragraph::Paragraph;
pub use setext::SetextUnderline;
