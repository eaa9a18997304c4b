pub mod in_memory_bus;
