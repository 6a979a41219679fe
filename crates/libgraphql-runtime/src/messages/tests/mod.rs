mod graph_message_collection_tests;
