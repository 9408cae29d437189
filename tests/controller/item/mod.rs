mod get_item_count;
mod get_items_by_type;
mod search_items;

use super::*;
