mod jwt_issuer_tests;
