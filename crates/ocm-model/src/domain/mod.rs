mod labels;
pub use labels::Labels;

mod hub;
pub use hub::HubContext;

mod constants;
pub use constants::{LABEL_CLOUD, LABEL_CLUSTER_ID, LABEL_NAME, LABEL_VENDOR, LABEL_VERSION};
