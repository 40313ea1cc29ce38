mod test_countries;
