mod ast_printer_tests;
mod block_string_tests;
