mod get_inventory;

use super::*;
