mod app_layout;
pub use app_layout::AppLayout;

pub use ui::views::AboutView as About;
pub use ui::views::ShowcaseView as Showcase;
