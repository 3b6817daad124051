pub mod pack_server;
