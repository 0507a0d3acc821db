mod layout;
pub use layout::DrawerLayoutView;

mod showcase;
pub use showcase::ShowcaseView;

mod about;
pub use about::AboutView;

mod external_sheet;
pub use external_sheet::ExternalSheet;
