mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod product_list;
pub use product_list::ProductListView;

mod create_product;
pub use create_product::CreateProductView;

mod edit_product;
pub use edit_product::EditProductView;
