mod inventory;
mod item;
