mod clean_file_tests;
