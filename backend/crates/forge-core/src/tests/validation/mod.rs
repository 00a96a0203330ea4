mod identity_validator;
