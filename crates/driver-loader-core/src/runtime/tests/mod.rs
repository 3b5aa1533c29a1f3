pub mod plugin_id_tests;
