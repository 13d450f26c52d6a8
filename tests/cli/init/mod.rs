mod keeps_existing_files_contract;
mod rejects_malformed_answers_contract;
