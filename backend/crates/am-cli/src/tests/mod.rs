mod send_status;
